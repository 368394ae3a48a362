// src/merge/output.rs
//! Output path resolution and the single report write.

use crate::error::{CtrfError, Result};
use crate::report::codec;
use crate::report::Report;
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Default filename when the destination is a directory.
pub const DEFAULT_OUTPUT_FILE: &str = "ctrf-report.json";

/// Anchors a relative path to the current working directory.
///
/// Resolution happens at call time; for an unchanged filesystem the
/// same input always yields the same absolute path.
#[must_use]
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}

/// Resolves a raw destination string to the concrete output file.
///
/// A trailing separator, or a path that already exists as a directory,
/// selects directory semantics and appends [`DEFAULT_OUTPUT_FILE`].
/// Anything else is taken as a file path.
#[must_use]
pub fn resolve_output(raw: &str) -> PathBuf {
    let trailing = raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR);
    let path = absolutize(Path::new(raw));
    if trailing || path.is_dir() {
        path.join(DEFAULT_OUTPUT_FILE)
    } else {
        path
    }
}

/// Resolves the deprecated directory + filename form: the directory
/// part comes from `--output-dir`, the filename from `--output`.
#[must_use]
pub fn resolve_output_dir(dir: &Path, output: &str) -> PathBuf {
    let file_name = Path::new(output)
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_OUTPUT_FILE));
    absolutize(dir).join(file_name)
}

/// Encodes the report and writes it at `path`, creating any missing
/// parent directories first.
///
/// # Errors
/// Returns error if encoding, directory creation, or the write fails.
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CtrfError::io(e, parent))?;
    }
    let text = codec::encode(report)?;
    fs::write(path, text).map_err(|e| CtrfError::io(e, path))
}
