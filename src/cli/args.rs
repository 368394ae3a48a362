// src/cli/args.rs
use crate::merge::ToolPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ctrf", version, about = "Merge, filter, and inspect CTRF test reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge all CTRF reports in a directory into a single report
    Merge {
        /// Directory containing the CTRF reports
        directory: PathBuf,
        /// Output file path; a trailing separator or an existing
        /// directory selects <dir>/ctrf-report.json (default: ctrf-report.json)
        #[arg(long, short)]
        output: Option<String>,
        /// Output directory for the merged report
        #[arg(long, short = 'd', value_name = "DIR", hide = true)]
        output_dir: Option<PathBuf>,
        /// Keep the source reports after merging
        #[arg(long, short)]
        keep_reports: bool,
        /// Which input's tool metadata the merged report carries
        #[arg(long, value_enum)]
        tool_policy: Option<ToolPolicy>,
    },
    /// Check a CTRF report for structural problems
    Validate {
        /// CTRF report file
        file: PathBuf,
    },
    /// List the flaky tests recorded in a CTRF report
    Flaky {
        /// CTRF report file
        file: PathBuf,
    },
    /// Keep only the tests matching every given criterion
    Filter {
        /// CTRF report file, or `-` for stdin
        file: String,
        /// Exact test id
        #[arg(long)]
        id: Option<String>,
        /// Regular expression matched against test names
        #[arg(long)]
        name: Option<String>,
        /// Comma-separated statuses (a test may match any of them)
        #[arg(long)]
        status: Option<String>,
        /// Comma-separated tags (a test must carry all of them)
        #[arg(long)]
        tags: Option<String>,
        /// Exact suite name
        #[arg(long)]
        suite: Option<String>,
        /// Exact test type
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,
        /// Exact browser name
        #[arg(long)]
        browser: Option<String>,
        /// Exact device name
        #[arg(long)]
        device: Option<String>,
        /// Flaky flag must equal this value
        #[arg(long, value_name = "BOOL")]
        flaky: Option<bool>,
        /// Write the filtered report here instead of stdout
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Stamp the report with a fresh random report identifier
    GenerateReportId {
        /// CTRF report file
        file: PathBuf,
        /// Write the updated report here instead of stdout
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Give every test a deterministic identifier
    GenerateTestIds {
        /// CTRF report file
        file: PathBuf,
        /// Write the updated report here instead of stdout
        #[arg(long, short)]
        output: Option<String>,
    },
}
