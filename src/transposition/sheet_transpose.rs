//! Whole-sheet transposition
//!
//! The key pair is resolved once, up front. If either key is bad nothing
//! else runs. After that every line is handled on its own:
//! - blank and lyric lines are copied byte-for-byte
//! - chord lines are scanned and each chord token is transposed in place,
//!   with filler characters kept in their original order
//!
//! Line terminators (`\n` or `\r\n`) are reproduced exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{LineKind, LineSegment, Sheet};
use crate::parse::{ChordParser, LineClassifier};
use super::chord_transpose::ChordTransposer;
use super::errors::InvalidKeyError;
use super::offset::SemitoneOffset;

/// Counts gathered while transposing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransposeStats {
    pub line_count: usize,
    pub chord_lines: usize,
    /// Chord tokens whose root moved (or would move, for a zero offset)
    pub transposed_chords: usize,
    /// Chord tokens left alone because their root is not a scale name
    pub unrecognized_chords: usize,
}

/// Result of transposing a sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransposedSheet {
    pub text: String,
    pub offset: SemitoneOffset,
    pub stats: TransposeStats,
}

impl fmt::Display for TransposedSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<TransposedSheet> for String {
    fn from(sheet: TransposedSheet) -> Self {
        sheet.text
    }
}

pub struct SheetTransposer;

impl SheetTransposer {
    /// Transpose every chord line of `sheet` from `original_key` to `target_key`
    pub fn transpose(
        original_key: &str,
        target_key: &str,
        sheet: &str,
    ) -> Result<TransposedSheet, InvalidKeyError> {
        let offset = SemitoneOffset::between(original_key, target_key)?;
        log::debug!("Transposing {} -> {} (offset {})", original_key, target_key, offset);

        Ok(Self::transpose_by(offset, sheet))
    }

    /// Transpose with an already resolved offset. Never fails.
    pub fn transpose_by(offset: SemitoneOffset, sheet: &str) -> TransposedSheet {
        let parsed = Sheet::parse(sheet);
        let mut stats = TransposeStats {
            line_count: parsed.len(),
            ..TransposeStats::default()
        };

        let mut contents: Vec<String> = Vec::with_capacity(parsed.len());
        for (row, line) in parsed.lines.iter().enumerate() {
            let kind = LineClassifier::classify(line.content);
            log::trace!("  line {}: {:?}", row, kind);

            match kind {
                LineKind::Blank | LineKind::Lyric => contents.push(line.content.to_string()),
                LineKind::Chord => {
                    stats.chord_lines += 1;
                    contents.push(Self::transpose_line(line.content, offset, &mut stats));
                }
            }
        }

        log::debug!(
            "Transposed {} lines ({} chord lines, {} chords, {} unrecognized)",
            stats.line_count,
            stats.chord_lines,
            stats.transposed_chords,
            stats.unrecognized_chords
        );

        TransposedSheet {
            text: parsed.join(&contents),
            offset,
            stats,
        }
    }

    /// Rebuild one chord line with every chord token transposed
    pub fn transpose_line(line: &str, offset: SemitoneOffset, stats: &mut TransposeStats) -> String {
        let mut out = String::with_capacity(line.len() + 8);

        for segment in ChordParser::parse_line(line) {
            match segment {
                LineSegment::Chord(token) => {
                    if token.is_recognized() {
                        stats.transposed_chords += 1;
                    } else {
                        stats.unrecognized_chords += 1;
                    }
                    out.push_str(&ChordTransposer::transpose(&token, offset));
                }
                LineSegment::Filler { text, .. } => out.push_str(&text),
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transposition::errors::KeyRole;

    fn run(original: &str, target: &str, sheet: &str) -> String {
        SheetTransposer::transpose(original, target, sheet).unwrap().text
    }

    #[test]
    fn test_chord_and_lyric_lines() {
        assert_eq!(run("C", "D", "C  G  Am  F\nHello world"), "D  A  Bm  G\nHello world");
    }

    #[test]
    fn test_down_a_fifth() {
        assert_eq!(run("G", "C", "G D Em C"), "C G Am F");
    }

    #[test]
    fn test_same_key_unchanged() {
        assert_eq!(run("C", "C", "C G Am F"), "C G Am F");
    }

    #[test]
    fn test_invalid_key_fails_before_processing() {
        let err = SheetTransposer::transpose("C", "Db", "C G").unwrap_err();
        assert_eq!(err.role, KeyRole::Target);
    }

    #[test]
    fn test_empty_sheet() {
        assert_eq!(run("C", "D", ""), "");
    }

    #[test]
    fn test_extended_chords() {
        assert_eq!(run("C", "D", "Cmaj7 G#dim"), "Dmaj7 A#dim");
    }

    #[test]
    fn test_blank_line_whitespace_kept() {
        assert_eq!(run("C", "D", "C\n   \nG"), "D\n   \nA");
    }

    #[test]
    fn test_flat_chord_left_alone_on_chord_line() {
        assert_eq!(run("C", "D", "C  Bb  F"), "D  Bb  G");
    }

    #[test]
    fn test_crlf_preserved() {
        assert_eq!(run("A", "B", "A  E\r\nsing it\r\n"), "B  F#\r\nsing it\r\n");
    }

    #[test]
    fn test_stats() {
        let result = SheetTransposer::transpose("C", "E", "C  Db  G7\nla\n\nAm").unwrap();
        assert_eq!(result.offset.semitones(), 4);
        assert_eq!(
            result.stats,
            TransposeStats {
                line_count: 4,
                chord_lines: 2,
                transposed_chords: 3,
                unrecognized_chords: 1,
            }
        );
        assert_eq!(result.to_string(), "E  Db  B7\nla\n\nC#m");
    }
}
