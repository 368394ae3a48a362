// src/flaky.rs
//! Flaky test lookup: a single pass over the test list.

use crate::report::{Report, TestRecord};

/// Returns the tests the producing tool marked as flaky.
#[must_use]
pub fn flaky_tests(report: &Report) -> Vec<&TestRecord> {
    report
        .results
        .tests
        .iter()
        .filter(|t| t.flaky == Some(true))
        .collect()
}
