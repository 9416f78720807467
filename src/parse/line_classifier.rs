//! Chord line vs lyric line detection
//!
//! A line is a chord line when its first non-whitespace character is a
//! capital A-G. This misfires on lyrics such as "Go now" or "Baby, baby",
//! which are then scanned as chord lines. No stronger signal is used.

use crate::models::LineKind;
use super::chord_parser::ChordParser;

pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(line: &str) -> LineKind {
        let trimmed = line.trim();

        match trimmed.chars().next() {
            None => LineKind::Blank,
            Some(c) if ChordParser::is_root_letter(c) => LineKind::Chord,
            Some(_) => LineKind::Lyric,
        }
    }
}
