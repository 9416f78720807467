//! Sheets and their lines
//!
//! A sheet is the raw multi-line text the user pasted. Splitting it keeps
//! every line terminator so joining the lines back reproduces the input
//! byte-for-byte.

use serde::{Deserialize, Serialize};

/// How a line was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// Sung text, never modified
    Lyric,
    /// Chord symbols interleaved with filler
    Chord,
}

/// Terminator that followed a line in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineEnding {
    Lf,
    CrLf,
    /// Last line of the sheet
    None,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::None => "",
        }
    }
}

/// One line of a sheet, without its terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLine<'a> {
    pub content: &'a str,
    pub ending: LineEnding,
}

/// A sheet split into lines, borrowing from the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet<'a> {
    pub lines: Vec<SheetLine<'a>>,
}

impl<'a> Sheet<'a> {
    /// Split on `\n`. A `\r` right before the `\n` belongs to the ending.
    ///
    /// The empty string is a sheet of one empty line, and a trailing newline
    /// produces a final empty line, so `join` always gives the input back.
    pub fn parse(text: &'a str) -> Self {
        let mut lines = Vec::new();
        let mut rest = text;

        loop {
            match rest.find('\n') {
                Some(pos) => {
                    let raw = &rest[..pos];
                    let (content, ending) = match raw.strip_suffix('\r') {
                        Some(stripped) => (stripped, LineEnding::CrLf),
                        None => (raw, LineEnding::Lf),
                    };
                    lines.push(SheetLine { content, ending });
                    rest = &rest[pos + 1..];
                }
                None => {
                    lines.push(SheetLine { content: rest, ending: LineEnding::None });
                    break;
                }
            }
        }

        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.content.is_empty())
    }

    /// Reassemble `contents`, one per line, using this sheet's terminators
    pub fn join<S: AsRef<str>>(&self, contents: &[S]) -> String {
        let mut out = String::new();
        for (line, content) in self.lines.iter().zip(contents) {
            out.push_str(content.as_ref());
            out.push_str(line.ending.as_str());
        }
        out
    }
}
