// src/cli/handlers.rs
//! One handler per subcommand. Handlers return a typed exit value;
//! only the binary turns that into a process exit code. Diagnostics
//! go to stderr so stdout stays a clean report pipe.

use crate::config::Config;
use crate::error::{CtrfError, Result};
use crate::exit::CtrfExit;
use crate::filter::{filter_report, FilterCriteria};
use crate::flaky::flaky_tests;
use crate::ids;
use crate::merge::output::{resolve_output, write_report, DEFAULT_OUTPUT_FILE};
use crate::merge::{self, MergeOptions, ToolPolicy};
use crate::report::codec;
use crate::report::Report;
use crate::validate::validate_report;
use colored::Colorize;
use regex::Regex;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Arguments for the filter command (mirrors the clap surface).
#[derive(Debug, Clone, Default)]
pub struct FilterArgs {
    pub file: String,
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub tags: Option<String>,
    pub suite: Option<String>,
    pub kind: Option<String>,
    pub browser: Option<String>,
    pub device: Option<String>,
    pub flaky: Option<bool>,
    pub output: Option<String>,
}

/// Handles the merge command.
///
/// # Errors
/// Returns error if the scan, aggregation, or write fails.
pub fn handle_merge(
    directory: &Path,
    output: Option<&str>,
    output_dir: Option<&Path>,
    keep_reports: bool,
    tool_policy: Option<ToolPolicy>,
) -> Result<CtrfExit> {
    let defaults = Config::load().merge;

    if output_dir.is_some() {
        eprintln!(
            "{} --output-dir is deprecated; use --output with a path instead",
            "warning:".yellow().bold()
        );
    }

    let opts = MergeOptions {
        output: output
            .map(str::to_string)
            .or(defaults.output)
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string()),
        output_dir: output_dir.map(Path::to_path_buf),
        keep_reports: keep_reports || defaults.keep_reports.unwrap_or(false),
        tool_policy: tool_policy.or(defaults.tool_policy).unwrap_or_default(),
    };

    let outcome = merge::run(directory, &opts)?;

    eprintln!(
        "{} Merged {} report(s) ({} tests)",
        "✓".green(),
        outcome.sources,
        outcome.tests
    );
    eprintln!("{} Saved to {}", "✓".green(), outcome.output.display());
    Ok(CtrfExit::Success)
}

/// Handles the validate command.
///
/// # Errors
/// Returns error if the file is missing or not decodable.
pub fn handle_validate(file: &Path) -> Result<CtrfExit> {
    let report = codec::read_report(file)?;
    let findings = validate_report(&report);
    let display = basename(file);

    if findings.is_empty() {
        eprintln!("{} {display} is a valid CTRF report", "✓".green());
        Ok(CtrfExit::Success)
    } else {
        eprintln!("{} {display} failed validation:", "✗".red());
        for finding in &findings {
            eprintln!("  - {finding}");
        }
        Ok(CtrfExit::ValidationFailed)
    }
}

/// Handles the flaky command.
///
/// # Errors
/// Returns error if the file is missing or not decodable.
pub fn handle_flaky(file: &Path) -> Result<CtrfExit> {
    let report = codec::read_report(file)?;
    let flaky = flaky_tests(&report);

    if flaky.is_empty() {
        println!("No flaky tests found in {}", file.display());
    } else {
        println!("Found {} flaky test(s):", flaky.len());
        for test in flaky {
            println!(
                "- Test Name: {}, Retries: {}",
                test.name,
                test.retries.unwrap_or(0)
            );
        }
    }
    Ok(CtrfExit::Success)
}

/// Handles the filter command.
///
/// # Errors
/// Returns error on missing/undecodable input, a bad criterion, or a
/// failed write.
pub fn handle_filter(args: &FilterArgs) -> Result<CtrfExit> {
    let (report, display) = read_file_or_stdin(&args.file)?;

    let mut criteria = FilterCriteria {
        id: args.id.clone(),
        suite: args.suite.clone(),
        kind: args.kind.clone(),
        browser: args.browser.clone(),
        device: args.device.clone(),
        flaky: args.flaky,
        ..FilterCriteria::default()
    };
    if let Some(name) = &args.name {
        criteria.name = Some(Regex::new(name)?);
    }
    if let Some(status) = &args.status {
        criteria = criteria.with_statuses(status)?;
    }
    if let Some(tags) = &args.tags {
        criteria = criteria.with_tags(tags);
    }

    let filtered = filter_report(&report, &criteria);
    let kept = filtered.results.tests.len();

    if let Some(path) = emit(&filtered, args.output.as_deref())? {
        eprintln!("{} Filtered {kept} tests from {display}", "✓".green());
        eprintln!("{} Saved to {}", "✓".green(), path.display());
    }
    Ok(CtrfExit::Success)
}

/// Handles the generate-report-id command.
///
/// # Errors
/// Returns error on missing/undecodable input or a failed write.
pub fn handle_report_id(file: &Path, output: Option<&str>) -> Result<CtrfExit> {
    let mut report = codec::read_report(file)?;
    let id = ids::assign_report_id(&mut report);

    if let Some(path) = emit(&report, output)? {
        eprintln!("{} Generated report ID: {id}", "✓".green());
        eprintln!("{} Saved to {}", "✓".green(), path.display());
    }
    Ok(CtrfExit::Success)
}

/// Handles the generate-test-ids command.
///
/// # Errors
/// Returns error on missing/undecodable input or a failed write.
pub fn handle_test_ids(file: &Path, output: Option<&str>) -> Result<CtrfExit> {
    let mut report = codec::read_report(file)?;
    let count = ids::assign_test_ids(&mut report);

    if let Some(path) = emit(&report, output)? {
        eprintln!("{} Generated IDs for {count} tests", "✓".green());
        eprintln!("{} Saved to {}", "✓".green(), path.display());
    }
    Ok(CtrfExit::Success)
}

/// Writes the report to `output` when given (creating parents,
/// returning the resolved path) or prints it to stdout. Destinations
/// follow the same file-or-directory rules as the merge output.
fn emit(report: &Report, output: Option<&str>) -> Result<Option<PathBuf>> {
    match output {
        Some(raw) => {
            let path = resolve_output(raw);
            write_report(&path, report)?;
            Ok(Some(path))
        }
        None => {
            print!("{}", codec::encode(report)?);
            Ok(None)
        }
    }
}

fn read_file_or_stdin(file: &str) -> Result<(Report, String)> {
    if file == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CtrfError::io(e, "<stdin>"))?;
        let report =
            codec::decode(&text).map_err(|e| CtrfError::malformed("<stdin>", e))?;
        Ok((report, "stdin".to_string()))
    } else {
        let path = Path::new(file);
        let report = codec::read_report(path)?;
        Ok((report, basename(path)))
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
