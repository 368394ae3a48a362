// src/merge/mod.rs
//! The merge pipeline: scan, aggregate, resolve, write, clean up.
//!
//! `Scan -> (no candidates => NoUsableReports) -> Aggregate ->
//! ResolvePath -> Write -> (keep ? Done : DeleteLoop) -> Done`.
//! Strictly sequential, one attempt per step, and the write always
//! completes before any source deletion. A crash after the write
//! leaves both sources and the merged file on disk, which re-running
//! recovers from.

pub mod aggregate;
pub mod output;
pub mod retention;
pub mod scan;

pub use aggregate::ToolPolicy;

use crate::error::{CtrfError, Result};
use std::path::{Path, PathBuf};

/// Options for one merge invocation.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Raw destination string (file, or directory via trailing
    /// separator / existing directory).
    pub output: String,
    /// Deprecated directory destination; overrides the directory part
    /// of `output` when present.
    pub output_dir: Option<PathBuf>,
    /// Keep the source reports instead of deleting them.
    pub keep_reports: bool,
    /// Tool metadata propagation policy.
    pub tool_policy: ToolPolicy,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            output: output::DEFAULT_OUTPUT_FILE.to_string(),
            output_dir: None,
            keep_reports: false,
            tool_policy: ToolPolicy::default(),
        }
    }
}

/// Outcome of a successful merge.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Where the merged report was written.
    pub output: PathBuf,
    /// How many source reports were consumed.
    pub sources: usize,
    /// Total tests in the merged report.
    pub tests: u64,
}

/// Runs the full merge pipeline over a directory of reports.
///
/// # Errors
/// `PathNotFound` / `NotADirectory` from the scan, `NoUsableReports`
/// when zero candidates survive filtering, or an I/O error from the
/// write. Retention failures are warnings, never errors.
pub fn run(directory: &Path, opts: &MergeOptions) -> Result<MergeOutcome> {
    let sources = scan::scan_directory(directory)?;
    let Some((first, rest)) = sources.split_first() else {
        return Err(CtrfError::NoUsableReports(directory.to_path_buf()));
    };

    let merged = aggregate::merge_reports(
        &first.report,
        rest.iter().map(|s| &s.report),
        opts.tool_policy,
    );

    let destination = match &opts.output_dir {
        Some(dir) => output::resolve_output_dir(dir, &opts.output),
        None => output::resolve_output(&opts.output),
    };

    output::write_report(&destination, &merged)?;

    if !opts.keep_reports {
        retention::remove_sources(&sources, &destination);
    }

    Ok(MergeOutcome {
        output: destination,
        sources: sources.len(),
        tests: merged.results.summary.tests,
    })
}
