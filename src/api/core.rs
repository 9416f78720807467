//! WASM API for the chord transposer
//!
//! Thin wrappers: each exported function logs, calls into the pure Rust
//! core, and converts errors to `JsValue` strings for the front-end to show.

use wasm_bindgen::prelude::*;

use crate::models::ChromaticScale;
use crate::parse::analyze_sheet;
use crate::transposition::{SemitoneOffset, SheetTransposer};
use crate::{wasm_info, wasm_log};
use super::helpers::{deserialize, serialize, to_js_error, validate_request};
use super::types::{ApiError, TransposeRequest, TransposeResponse};

/// Validate and run a transposition request
///
/// This is the native entry point behind `transposeRequest`; it performs the
/// same trimming and empty-field checks as the input form.
pub fn run_request(request: TransposeRequest) -> Result<TransposeResponse, ApiError> {
    let request = validate_request(request)?;
    let result = SheetTransposer::transpose(&request.original_key, &request.target_key, &request.sheet)?;

    Ok(TransposeResponse {
        text: result.text,
        offset: result.offset,
        stats: result.stats,
    })
}

/// Render the per-line analysis of a sheet as pretty JSON
pub fn analysis_json(sheet: &str) -> Result<String, ApiError> {
    let lines = analyze_sheet(sheet);
    serde_json::to_string_pretty(&lines).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Transpose a sheet and return only the new text
///
/// # Parameters
/// - `original_key`: key the sheet is written in (e.g. "G", "F#")
/// - `target_key`: key to move to
/// - `sheet`: the pasted lyrics-and-chords text
#[wasm_bindgen(js_name = transposeSheet)]
pub fn transpose_sheet(original_key: &str, target_key: &str, sheet: &str) -> Result<String, JsValue> {
    wasm_info!(
        "transposeSheet called: {} -> {}, {} bytes",
        original_key,
        target_key,
        sheet.len()
    );

    let response = run_request(TransposeRequest {
        original_key: original_key.to_string(),
        target_key: target_key.to_string(),
        sheet: sheet.to_string(),
    })
    .map_err(to_js_error)?;

    wasm_log!(
        "  {} chords transposed by {}, {} passed through",
        response.stats.transposed_chords,
        response.offset,
        response.stats.unrecognized_chords
    );

    Ok(response.text)
}

/// Transpose from a `{ originalKey, targetKey, sheet }` object
///
/// # Returns
/// `{ text, offset, stats: { lineCount, chordLines, transposedChords, unrecognizedChords } }`
#[wasm_bindgen(js_name = transposeRequest)]
pub fn transpose_request(request_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("transposeRequest called");

    let request: TransposeRequest =
        deserialize(request_js, "Invalid transpose request").map_err(to_js_error)?;
    let response = run_request(request).map_err(to_js_error)?;

    serialize(&response, "Failed to serialize transpose response").map_err(to_js_error)
}

/// Classify every line and list the chords found, as JSON
#[wasm_bindgen(js_name = analyzeSheet)]
pub fn analyze_sheet_js(sheet: &str) -> Result<String, JsValue> {
    wasm_info!("analyzeSheet called: {} bytes", sheet.len());

    let json = analysis_json(sheet).map_err(to_js_error)?;

    wasm_log!("  analysis JSON generated: {} bytes", json.len());
    Ok(json)
}

/// The twelve key names accepted by the transposer, in scale order
#[wasm_bindgen(js_name = availableKeys)]
pub fn available_keys() -> Vec<String> {
    ChromaticScale::names().map(str::to_string).collect()
}

/// Semitones (0-11) needed to go from one key to the other
#[wasm_bindgen(js_name = semitoneOffset)]
pub fn semitone_offset(original_key: &str, target_key: &str) -> Result<u8, JsValue> {
    SemitoneOffset::between(original_key.trim(), target_key.trim())
        .map(|offset| offset.semitones())
        .map_err(|e| to_js_error(e.into()))
}
