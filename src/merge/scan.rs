// src/merge/scan.rs
//! Directory scanner: finds the CTRF reports eligible for a merge.

use crate::error::{CtrfError, Result};
use crate::merge::output::absolutize;
use crate::report::codec;
use crate::report::Report;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A report accepted as a merge candidate, paired with the absolute
/// path it was read from.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub path: PathBuf,
    pub report: Report,
}

/// Scans a directory (non-recursive) for decodable CTRF reports.
///
/// Only `.json` entries are considered, in lexicographic filename
/// order so the merge is deterministic. Files that fail to read or
/// decode are skipped with a warning, never fatal.
///
/// # Errors
/// `PathNotFound` if the directory is missing, `NotADirectory` if the
/// path is not a directory.
pub fn scan_directory(dir: &Path) -> Result<Vec<SourceReport>> {
    if !dir.exists() {
        return Err(CtrfError::PathNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(CtrfError::NotADirectory(dir.to_path_buf()));
    }

    let mut candidates: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    candidates.sort();

    let mut sources = Vec::new();
    for path in candidates {
        match read_candidate(&path) {
            Ok(report) => sources.push(SourceReport {
                path: absolutize(&path),
                report,
            }),
            Err(reason) => {
                eprintln!(
                    "{} skipping {}: {reason}",
                    "warning:".yellow().bold(),
                    path.display()
                );
            }
        }
    }
    Ok(sources)
}

fn read_candidate(path: &Path) -> std::result::Result<Report, String> {
    let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
    codec::decode(&text).map_err(|e| e.to_string())
}
