pub mod errors;
pub mod offset;
pub mod chord_transpose;
pub mod sheet_transpose;

pub use errors::{InvalidKeyError, KeyRole};
pub use offset::SemitoneOffset;
pub use chord_transpose::ChordTransposer;
pub use sheet_transpose::{SheetTransposer, TransposeStats, TransposedSheet};
