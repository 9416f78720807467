//! Error types for transposition
//!
//! Key resolution is the only step that can fail. Unknown chord roots are
//! passed through, and empty or odd sheet text transposes to itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which of the two requested keys a failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyRole {
    Original,
    Target,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Original => write!(f, "original"),
            KeyRole::Target => write!(f, "target"),
        }
    }
}

/// A key name that is not one of C C# D D# E F F# G G# A A# B
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {role} key '{key}'. Expected one of: C, C#, D, D#, E, F, F#, G, G#, A, A#, B")]
pub struct InvalidKeyError {
    pub key: String,
    pub role: KeyRole,
}

impl InvalidKeyError {
    pub fn new(key: impl Into<String>, role: KeyRole) -> Self {
        Self { key: key.into(), role }
    }
}
