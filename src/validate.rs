// src/validate.rs
//! Structural validation of a decoded report.
//!
//! The CTRF schema itself is defined elsewhere; this pass checks the
//! invariants the merge engine relies on: counter consistency, list
//! length, an ordered time window, and recognized status values.

use crate::report::{Report, TestStatus};

/// Checks a report's structural invariants, returning one finding per
/// violated rule. An empty vec means the report is consistent.
#[must_use]
pub fn validate_report(report: &Report) -> Vec<String> {
    let mut findings = Vec::new();
    let summary = &report.results.summary;

    let counted = summary.counted();
    if summary.tests != counted {
        findings.push(format!(
            "summary.tests is {} but the status counters sum to {counted}",
            summary.tests
        ));
    }

    let listed = report.results.tests.len() as u64;
    if summary.tests != listed {
        findings.push(format!(
            "summary.tests is {} but {listed} tests are listed",
            summary.tests
        ));
    }

    if summary.start > summary.stop {
        findings.push(format!(
            "summary.start ({}) is after summary.stop ({})",
            summary.start, summary.stop
        ));
    }

    for (i, test) in report.results.tests.iter().enumerate() {
        if test.name.is_empty() {
            findings.push(format!("tests[{i}] has an empty name"));
        }
        if let TestStatus::Unrecognized(raw) = &test.status {
            findings.push(format!("tests[{i}] has unrecognized status '{raw}'"));
        }
    }

    findings
}
