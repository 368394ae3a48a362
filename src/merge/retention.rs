// src/merge/retention.rs
//! Source file cleanup after a successful merge.

use crate::merge::scan::SourceReport;
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Deletes every scanned source file except the output file itself.
///
/// Runs strictly after the merged report has been written. Retention
/// is best-effort cleanup: a file that cannot be removed produces a
/// warning, not a failure, since the merge already succeeded.
pub fn remove_sources(sources: &[SourceReport], output: &Path) {
    // The merged file exists at this point, so canonicalizing both
    // sides resolves `..` segments and symlinks that a lexical path
    // comparison would miss (e.g. `-o reports/../reports/x.json`).
    let output = fs::canonicalize(output).unwrap_or_else(|_| output.to_path_buf());
    for source in sources {
        let path =
            fs::canonicalize(&source.path).unwrap_or_else(|_| source.path.clone());
        if path == output {
            continue;
        }
        if let Err(e) = fs::remove_file(&source.path) {
            eprintln!(
                "{} could not remove {}: {e}",
                "warning:".yellow().bold(),
                source.path.display()
            );
        }
    }
}
