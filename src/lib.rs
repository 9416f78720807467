//! Chord Transposer WASM Module
//!
//! Moves the chord symbols of a lyrics-and-chords sheet from one key to
//! another. Lyric lines, blank lines, spacing and line endings come back
//! exactly as they went in.
//!
//! ```
//! let out = chord_transposer_wasm::transpose("C", "D", "C  G  Am  F\nHello world").unwrap();
//! assert_eq!(out.text, "D  A  Bm  G\nHello world");
//! ```

pub mod models;
pub mod parse;
pub mod transposition;
pub mod api;

// Re-export commonly used types
pub use models::{ChordToken, ChromaticScale, LineKind, LineSegment, PitchClass, Span};
pub use parse::{analyze_sheet, ChordParser, LineAnalysis, LineClassifier};
pub use transposition::{
    ChordTransposer, InvalidKeyError, KeyRole, SemitoneOffset, SheetTransposer, TransposeStats,
    TransposedSheet,
};

use wasm_bindgen::prelude::*;

/// Transpose every chord line of `sheet` from `original_key` to `target_key`
///
/// Keys must be spelled exactly as one of C C# D D# E F F# G G# A A# B.
/// Anything else, flats included, is an `InvalidKeyError` and no line is
/// touched.
pub fn transpose(
    original_key: &str,
    target_key: &str,
    sheet: &str,
) -> Result<TransposedSheet, InvalidKeyError> {
    SheetTransposer::transpose(original_key, target_key, sheet)
}

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::warn!("Logger already initialized");
        }
    }

    log::info!("Chord Transposer WASM module initialized");
}
