// src/report/codec.rs
//! Decode/encode boundary for CTRF documents.
//!
//! Decoding distinguishes text that is not JSON at all (`Syntax`) from
//! JSON that lacks the minimal recognizable shape, a `results.tests`
//! sequence (`Shape`). Directory scans recover from either; single-file
//! commands treat them as fatal with different exit codes.

use crate::error::{CtrfError, Result};
use crate::report::model::Report;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("not a CTRF report: {0}")]
    Shape(String),
}

/// Decodes CTRF text into a typed report.
///
/// # Errors
/// Returns `Syntax` for unparseable input, `Shape` when the document
/// has no `results.tests` sequence or a test entry is unusable.
pub fn decode(input: &str) -> std::result::Result<Report, DecodeError> {
    let value: Value = serde_json::from_str(input).map_err(DecodeError::Syntax)?;
    match value.pointer("/results/tests") {
        Some(tests) if tests.is_array() => {}
        _ => return Err(DecodeError::Shape("missing results.tests sequence".into())),
    }
    serde_json::from_value(value).map_err(|e| DecodeError::Shape(e.to_string()))
}

/// Encodes a report as pretty-printed JSON with a trailing newline.
///
/// # Errors
/// Returns error if serialization fails.
pub fn encode(report: &Report) -> Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

/// Reads and decodes a report file, checking the path kind first.
///
/// # Errors
/// `PathNotFound` if the file is missing, `NotAFile` if it is a
/// directory, `Malformed` if decoding fails.
pub fn read_report(path: &Path) -> Result<Report> {
    if !path.exists() {
        return Err(CtrfError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CtrfError::NotAFile(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|e| CtrfError::io(e, path))?;
    decode(&text).map_err(|e| CtrfError::malformed(path, e))
}
