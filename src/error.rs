// src/error.rs
use crate::report::codec::DecodeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CtrfError {
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("not a file: {0}")]
    NotAFile(PathBuf),

    #[error("invalid CTRF report {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("no usable CTRF reports found in {0}")]
    NoUsableReports(PathBuf),

    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid regex: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, CtrfError>;

impl CtrfError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        CtrfError::Io {
            source,
            path: path.into(),
        }
    }

    /// Wraps a decode failure with the file it came from.
    pub fn malformed(path: impl Into<PathBuf>, source: DecodeError) -> Self {
        CtrfError::Malformed {
            path: path.into(),
            source,
        }
    }
}
