// src/merge/aggregate.rs
//! Pure aggregation of reports into one.
//!
//! No file system access here: the fold operates on in-memory reports
//! only, so it is unit-testable without touching storage.

use crate::report::Report;
use clap::ValueEnum;
use serde::Deserialize;

/// Which input's tool metadata the merged report carries.
///
/// Inputs may disagree about the producing tool and nothing upstream
/// resolves that, so the choice is a policy, not a hard-coded rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolPolicy {
    /// The first scanned report wins.
    #[default]
    First,
    /// The last scanned report wins.
    Last,
}

/// Folds `rest` into `seed` in order: counters are summed, test lists
/// concatenated, and the time window widened to min(start)/max(stop).
/// `summary.tests` becomes the sum of the inputs' totals. With no
/// `rest`, the seed is returned unchanged.
///
/// A merge of zero reports is unrepresentable here; callers reject an
/// empty scan as `NoUsableReports` before aggregating.
#[must_use]
pub fn merge_reports<'a, I>(seed: &Report, rest: I, policy: ToolPolicy) -> Report
where
    I: IntoIterator<Item = &'a Report>,
{
    let mut merged = seed.clone();
    let mut summary = seed.results.summary.clone();

    for report in rest {
        let s = &report.results.summary;
        summary.tests += s.tests;
        summary.passed += s.passed;
        summary.failed += s.failed;
        summary.skipped += s.skipped;
        summary.pending += s.pending;
        summary.other += s.other;
        summary.start = summary.start.min(s.start);
        summary.stop = summary.stop.max(s.stop);

        merged
            .results
            .tests
            .extend(report.results.tests.iter().cloned());

        if policy == ToolPolicy::Last {
            merged.results.tool = report.results.tool.clone();
        }
    }

    merged.results.summary = summary;
    merged
}
