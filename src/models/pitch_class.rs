//! The twelve sharp-spelled pitch classes and the chromatic cycle they form
//!
//! Only naturals and sharps are members of the cycle:
//!   C C# D D# E F F# G G# A A# B
//!
//! Flat spellings (Db, Bb, ...) are deliberately NOT members. Looking one up
//! yields `None`, and a chord or key spelled that way is treated as unknown.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

impl PitchClass {
    /// Position in the chromatic cycle (0 = C, 11 = B)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Canonical spelling of this pitch class
    pub fn as_str(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    /// Move up the cycle by `semitones`, wrapping past B back to C
    pub fn shifted(self, semitones: u8) -> PitchClass {
        ChromaticScale::name_at(self.index() as usize + semitones as usize)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed, ordered 12-tone cycle
pub struct ChromaticScale;

impl ChromaticScale {
    pub const LEN: usize = 12;

    pub const PITCHES: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Exact lookup of a spelling. Case-sensitive, no trimming.
    pub fn index_of(name: &str) -> Option<u8> {
        Self::pitch_of(name).map(PitchClass::index)
    }

    /// Exact lookup returning the pitch class itself
    pub fn pitch_of(name: &str) -> Option<PitchClass> {
        Self::PITCHES.iter().copied().find(|p| p.as_str() == name)
    }

    /// Pitch class at `index`, taken modulo 12
    pub fn name_at(index: usize) -> PitchClass {
        Self::PITCHES[index % Self::LEN]
    }

    /// All canonical names in cycle order
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::PITCHES.iter().map(|p| p.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_naturals_and_sharps() {
        assert_eq!(ChromaticScale::index_of("C"), Some(0));
        assert_eq!(ChromaticScale::index_of("C#"), Some(1));
        assert_eq!(ChromaticScale::index_of("F#"), Some(6));
        assert_eq!(ChromaticScale::index_of("G"), Some(7));
        assert_eq!(ChromaticScale::index_of("B"), Some(11));
    }

    #[test]
    fn test_index_of_rejects_flats_and_junk() {
        assert_eq!(ChromaticScale::index_of("Db"), None);
        assert_eq!(ChromaticScale::index_of("Bb"), None);
        assert_eq!(ChromaticScale::index_of("E#"), None);
        assert_eq!(ChromaticScale::index_of("c"), None);
        assert_eq!(ChromaticScale::index_of(" C"), None);
        assert_eq!(ChromaticScale::index_of(""), None);
        assert_eq!(ChromaticScale::index_of("H"), None);
    }

    #[test]
    fn test_name_at_wraps() {
        assert_eq!(ChromaticScale::name_at(0), PitchClass::C);
        assert_eq!(ChromaticScale::name_at(11), PitchClass::B);
        assert_eq!(ChromaticScale::name_at(12), PitchClass::C);
        assert_eq!(ChromaticScale::name_at(13), PitchClass::Cs);
        assert_eq!(ChromaticScale::name_at(23), PitchClass::B);
    }

    #[test]
    fn test_index_matches_position() {
        for (i, pitch) in ChromaticScale::PITCHES.iter().enumerate() {
            assert_eq!(pitch.index() as usize, i);
            assert_eq!(ChromaticScale::index_of(pitch.as_str()), Some(i as u8));
        }
    }

    #[test]
    fn test_shifted() {
        assert_eq!(PitchClass::A.shifted(3), PitchClass::C);
        assert_eq!(PitchClass::G.shifted(5), PitchClass::C);
        assert_eq!(PitchClass::E.shifted(0), PitchClass::E);
    }

    #[test]
    fn test_serde_uses_sharp_spelling() {
        let json = serde_json::to_string(&PitchClass::Fs).unwrap();
        assert_eq!(json, "\"F#\"");

        let parsed: PitchClass = serde_json::from_str("\"A#\"").unwrap();
        assert_eq!(parsed, PitchClass::As);
    }

    #[test]
    fn test_names_in_order() {
        let names: Vec<&str> = ChromaticScale::names().collect();
        assert_eq!(
            names,
            vec!["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"]
        );
    }
}
