//! Chord tokens and the segments a chord line is cut into
//!
//! Positions and lengths are counted in `char`s, not bytes, so spans line
//! up with what the user sees in a monospaced text area.

use serde::{Deserialize, Serialize};
use super::pitch_class::{ChromaticScale, PitchClass};

/// Half-open character range within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub length: usize,
}

impl Span {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// One past the last character covered
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// A chord symbol found on a chord line
///
/// `root_text` is the letter plus its optional accidental exactly as written
/// (`"C"`, `"F#"`, `"Bb"`). `root` is only set when that spelling is one of
/// the twelve scale names, so `"Bb"` and `"E#"` carry `root: None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordToken {
    pub text: String,
    pub root_text: String,
    pub root: Option<PitchClass>,
    pub suffix: String,
    pub span: Span,
}

impl ChordToken {
    pub fn new(root_text: String, suffix: String, start: usize) -> Self {
        let root = ChromaticScale::pitch_of(&root_text);
        let text = format!("{}{}", root_text, suffix);
        let length = text.chars().count();

        Self {
            text,
            root_text,
            root,
            suffix,
            span: Span::new(start, length),
        }
    }

    /// Whether the root is a member of the chromatic scale
    pub fn is_recognized(&self) -> bool {
        self.root.is_some()
    }
}

/// One piece of a chord line, in positional order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LineSegment {
    Chord(ChordToken),
    /// Run of characters outside any chord token, kept verbatim
    Filler { text: String, span: Span },
}

impl LineSegment {
    pub fn text(&self) -> &str {
        match self {
            LineSegment::Chord(token) => &token.text,
            LineSegment::Filler { text, .. } => text,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LineSegment::Chord(token) => token.span,
            LineSegment::Filler { span, .. } => *span,
        }
    }

    pub fn as_chord(&self) -> Option<&ChordToken> {
        match self {
            LineSegment::Chord(token) => Some(token),
            LineSegment::Filler { .. } => None,
        }
    }
}
