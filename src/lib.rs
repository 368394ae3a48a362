//! Core library for the `ctrf` command-line tool: a CTRF report
//! merge engine plus the single-pass sibling transformations
//! (validate, flaky, filter, identifier generation).

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod filter;
pub mod flaky;
pub mod ids;
pub mod merge;
pub mod report;
pub mod validate;
