//! Request, response and error types for the WASM API

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transposition::{InvalidKeyError, SemitoneOffset, TransposeStats};

/// What the front-end sends: the two keys and the pasted sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransposeRequest {
    pub original_key: String,
    pub target_key: String,
    pub sheet: String,
}

/// What the front-end gets back on success
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransposeResponse {
    pub text: String,
    pub offset: SemitoneOffset,
    pub stats: TransposeStats,
}

/// Errors surfaced to JavaScript
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidKey(#[from] InvalidKeyError),

    /// A required field was empty after trimming
    #[error("All fields must be filled out: '{0}' is empty")]
    EmptyField(&'static str),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
