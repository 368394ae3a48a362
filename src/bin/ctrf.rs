// src/bin/ctrf.rs
//! Thin dispatch shell: parse arguments, run the handler, translate
//! the typed outcome into a process exit code.

use clap::Parser;
use colored::Colorize;

use ctrf_core::cli::{handlers, Cli, Commands, FilterArgs};
use ctrf_core::error::Result;
use ctrf_core::exit::CtrfExit;

fn main() -> CtrfExit {
    let cli = Cli::parse();
    match dispatch(cli.command) {
        Ok(exit) => exit,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            CtrfExit::from(&e)
        }
    }
}

fn dispatch(command: Commands) -> Result<CtrfExit> {
    match command {
        Commands::Merge {
            directory,
            output,
            output_dir,
            keep_reports,
            tool_policy,
        } => handlers::handle_merge(
            &directory,
            output.as_deref(),
            output_dir.as_deref(),
            keep_reports,
            tool_policy,
        ),
        Commands::Validate { file } => handlers::handle_validate(&file),
        Commands::Flaky { file } => handlers::handle_flaky(&file),
        Commands::Filter {
            file,
            id,
            name,
            status,
            tags,
            suite,
            kind,
            browser,
            device,
            flaky,
            output,
        } => handlers::handle_filter(&FilterArgs {
            file,
            id,
            name,
            status,
            tags,
            suite,
            kind,
            browser,
            device,
            flaky,
            output,
        }),
        Commands::GenerateReportId { file, output } => {
            handlers::handle_report_id(&file, output.as_deref())
        }
        Commands::GenerateTestIds { file, output } => {
            handlers::handle_test_ids(&file, output.as_deref())
        }
    }
}
