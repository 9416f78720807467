//! Chord Transposer WASM API
//!
//! This module provides the JavaScript-facing API. The front-end collects the
//! two keys and the sheet text, calls one of these functions, and shows the
//! result or the error string.
//!
//! # Module Structure
//!
//! - `helpers`: Logging macros, request validation, JsValue conversion
//! - `types`: Request/response shapes and `ApiError`
//! - `core`: The exported functions

pub mod helpers;
pub mod types;
pub mod core;

pub use self::core::*;
pub use types::{ApiError, TransposeRequest, TransposeResponse};
