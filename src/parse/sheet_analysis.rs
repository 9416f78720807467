//! Read-only view of how a sheet is understood
//!
//! Used by the front-end to highlight chord lines and chord tokens before
//! (or without) transposing anything.

use serde::{Deserialize, Serialize};

use crate::models::{ChordToken, LineKind, Sheet};
use super::chord_parser::ChordParser;
use super::line_classifier::LineClassifier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAnalysis {
    pub row: usize,
    pub kind: LineKind,
    /// Empty unless `kind` is `Chord`
    pub chords: Vec<ChordToken>,
}

pub fn analyze_sheet(sheet: &str) -> Vec<LineAnalysis> {
    Sheet::parse(sheet)
        .lines
        .iter()
        .enumerate()
        .map(|(row, line)| {
            let kind = LineClassifier::classify(line.content);
            let chords = match kind {
                LineKind::Chord => ChordParser::chords(line.content),
                LineKind::Blank | LineKind::Lyric => Vec::new(),
            };
            LineAnalysis { row, kind, chords }
        })
        .collect()
}
