//! Data models for the chord transposer
//!
//! This module contains the transient values built for a single
//! transposition call: pitch classes, chord tokens, and sheet lines.

pub mod pitch_class;
pub mod chord;
pub mod sheet;

// Re-export commonly used types
pub use pitch_class::*;
pub use chord::*;
pub use sheet::*;
