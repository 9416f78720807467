//! Parsing module for the chord transposer
//!
//! This module contains the logic that reads a sheet line by line:
//! classifying each line and scanning chord lines into tokens.

pub mod chord_parser;
pub mod line_classifier;
pub mod sheet_analysis;

// Re-export commonly used types
pub use chord_parser::*;
pub use line_classifier::*;
pub use sheet_analysis::*;
