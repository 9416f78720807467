//! Shared helpers for WASM API operations
//!
//! Logging macros, request validation, and the conversions between Rust
//! values and `JsValue`. Validation is plain Rust so it can be exercised by
//! native tests; only `serialize`, `deserialize` and `to_js_error` touch
//! `JsValue`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::types::{ApiError, TransposeRequest};

// ============================================================================
// Logging Macros
// ============================================================================
//
// These go through the `log` facade. In the browser `console_log` is the
// installed logger, so they end up in the devtools console.

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        log::debug!("[WASM] {}", format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        log::info!("[WASM] {}", format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        log::warn!("[WASM] ⚠️ {}", format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        log::error!("[WASM] ❌ {}", format!($($arg)*))
    };
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Trim both keys and reject empty fields, as the input form expects
///
/// The sheet itself is returned untouched; it only has to contain something
/// other than whitespace.
pub fn validate_request(request: TransposeRequest) -> Result<TransposeRequest, ApiError> {
    let original_key = request.original_key.trim().to_string();
    let target_key = request.target_key.trim().to_string();

    if original_key.is_empty() {
        return Err(ApiError::EmptyField("originalKey"));
    }
    if target_key.is_empty() {
        return Err(ApiError::EmptyField("targetKey"));
    }
    if request.sheet.trim().is_empty() {
        return Err(ApiError::EmptyField("sheet"));
    }

    Ok(TransposeRequest {
        original_key,
        target_key,
        sheet: request.sheet,
    })
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, ApiError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| ApiError::Serialization(format!("{}: {}", error_context, e)))
}

/// Serialize a value to JavaScript
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, ApiError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| ApiError::Serialization(format!("{}: {}", error_context, e)))
}

/// Log an API error and turn it into a JS string value
pub fn to_js_error(err: ApiError) -> JsValue {
    let msg = err.to_string();
    match err {
        ApiError::InvalidKey(_) | ApiError::EmptyField(_) => wasm_warn!("{}", msg),
        ApiError::Serialization(_) => wasm_error!("{}", msg),
    }
    JsValue::from_str(&msg)
}
