//! Chord symbol scanner
//!
//! Grammar, matched greedily at each position:
//!
//! ```text
//! chord  := letter accidental? suffix*
//! letter := 'A'..='G'
//! accidental := '#' | 'b'
//! suffix := "dim" | "aug" | "sus" | "add" | "maj" | "m" | "M" | digit
//! ```
//!
//! Suffix pieces may repeat in any order, so `maj7sus4` and `m7b` style
//! strings are taken as one undifferentiated tail. At each repetition the
//! longest matching piece is taken.
//!
//! Scanning a line accounts for every character exactly once: either it is
//! inside a chord token or it is filler.

use crate::models::{ChordToken, LineSegment, Span};

/// Multi-character suffix pieces, longest first
const SUFFIX_SYMBOLS: [&str; 7] = ["dim", "aug", "sus", "add", "maj", "m", "M"];

pub struct ChordParser;

impl ChordParser {
    /// Chord token starting exactly at `pos`, if the grammar matches there
    pub fn token_at(chars: &[char], pos: usize) -> Option<ChordToken> {
        let letter = *chars.get(pos)?;
        if !Self::is_root_letter(letter) {
            return None;
        }

        let mut root_text = String::from(letter);
        let mut cursor = pos + 1;
        if let Some(&acc) = chars.get(cursor) {
            if acc == '#' || acc == 'b' {
                root_text.push(acc);
                cursor += 1;
            }
        }

        let suffix_start = cursor;
        while let Some(len) = Self::suffix_piece_len(chars, cursor) {
            cursor += len;
        }
        let suffix: String = chars[suffix_start..cursor].iter().collect();

        Some(ChordToken::new(root_text, suffix, pos))
    }

    /// Next chord token at or after character offset `from`
    pub fn next_chord(line: &str, from: usize) -> Option<ChordToken> {
        let chars: Vec<char> = line.chars().collect();
        (from..chars.len()).find_map(|pos| Self::token_at(&chars, pos))
    }

    /// Cut a line into chord tokens and filler runs, in order
    pub fn parse_line(line: &str) -> Vec<LineSegment> {
        let chars: Vec<char> = line.chars().collect();
        let mut segments = Vec::new();
        let mut filler = String::new();
        let mut filler_start = 0;
        let mut pos = 0;

        while pos < chars.len() {
            match Self::token_at(&chars, pos) {
                Some(token) => {
                    if !filler.is_empty() {
                        let length = pos - filler_start;
                        segments.push(LineSegment::Filler {
                            text: std::mem::take(&mut filler),
                            span: Span::new(filler_start, length),
                        });
                    }
                    pos = token.span.end();
                    segments.push(LineSegment::Chord(token));
                }
                None => {
                    if filler.is_empty() {
                        filler_start = pos;
                    }
                    filler.push(chars[pos]);
                    pos += 1;
                }
            }
        }

        if !filler.is_empty() {
            segments.push(LineSegment::Filler {
                text: filler,
                span: Span::new(filler_start, pos - filler_start),
            });
        }

        segments
    }

    /// Chord tokens of a line, dropping filler
    pub fn chords(line: &str) -> Vec<ChordToken> {
        Self::parse_line(line)
            .into_iter()
            .filter_map(|segment| match segment {
                LineSegment::Chord(token) => Some(token),
                LineSegment::Filler { .. } => None,
            })
            .collect()
    }

    pub fn is_root_letter(c: char) -> bool {
        matches!(c, 'A'..='G')
    }

    fn suffix_piece_len(chars: &[char], pos: usize) -> Option<usize> {
        let first = *chars.get(pos)?;
        if first.is_ascii_digit() {
            return Some(1);
        }

        SUFFIX_SYMBOLS
            .iter()
            .find(|symbol| {
                symbol
                    .chars()
                    .enumerate()
                    .all(|(i, c)| chars.get(pos + i) == Some(&c))
            })
            .map(|symbol| symbol.len())
    }
}
