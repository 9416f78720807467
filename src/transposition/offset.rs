//! Semitone distance between two keys
//!
//! Always normalized into 0..=11, so moving down a fifth (G -> C) is stored
//! as moving up a fourth (5).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::ChromaticScale;
use super::errors::{InvalidKeyError, KeyRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemitoneOffset(u8);

impl SemitoneOffset {
    pub const ZERO: SemitoneOffset = SemitoneOffset(0);

    /// Wrap any signed semitone count into the cycle
    pub fn from_semitones(semitones: i32) -> Self {
        Self(semitones.rem_euclid(ChromaticScale::LEN as i32) as u8)
    }

    /// Offset that carries `original_key` to `target_key`
    ///
    /// Both keys must be exact scale spellings. The original key is checked
    /// first, so when both are bad the error names the original.
    pub fn between(original_key: &str, target_key: &str) -> Result<Self, InvalidKeyError> {
        let from = ChromaticScale::index_of(original_key)
            .ok_or_else(|| InvalidKeyError::new(original_key, KeyRole::Original))?;
        let to = ChromaticScale::index_of(target_key)
            .ok_or_else(|| InvalidKeyError::new(target_key, KeyRole::Target))?;

        Ok(Self::from_semitones(to as i32 - from as i32))
    }

    pub fn semitones(&self) -> u8 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The offset that undoes this one
    pub fn inverse(&self) -> Self {
        Self::from_semitones(-(self.0 as i32))
    }
}

impl fmt::Display for SemitoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}
