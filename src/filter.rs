// src/filter.rs
//! Field-based test filtering.
//!
//! Criteria combine with AND; the `status` list is the one OR: a test
//! survives when its status matches any requested status. The filtered
//! report gets recounted summary counters while keeping the original
//! session time window.

use crate::error::{CtrfError, Result};
use crate::report::{Report, Summary, TestRecord, TestStatus};
use regex::Regex;

/// What to keep. Absent fields do not constrain.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub id: Option<String>,
    /// Regular expression matched against the test name.
    pub name: Option<Regex>,
    /// Any of these statuses.
    pub statuses: Option<Vec<TestStatus>>,
    /// All of these tags.
    pub tags: Option<Vec<String>>,
    pub suite: Option<String>,
    pub kind: Option<String>,
    pub browser: Option<String>,
    pub device: Option<String>,
    pub flaky: Option<bool>,
}

impl FilterCriteria {
    /// Parses comma-separated status names into the criteria.
    ///
    /// # Errors
    /// Returns `InvalidFilter` on an unknown status name.
    pub fn with_statuses(mut self, raw: &str) -> Result<Self> {
        let statuses = raw
            .split(',')
            .map(|s| s.trim().parse::<TestStatus>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(CtrfError::InvalidFilter)?;
        self.statuses = Some(statuses);
        Ok(self)
    }

    /// Parses comma-separated tags into the criteria.
    #[must_use]
    pub fn with_tags(mut self, raw: &str) -> Self {
        self.tags = Some(raw.split(',').map(|t| t.trim().to_string()).collect());
        self
    }

    fn matches(&self, test: &TestRecord) -> bool {
        if let Some(id) = &self.id {
            if test.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if !name.is_match(&test.name) {
                return false;
            }
        }
        if let Some(statuses) = &self.statuses {
            if !statuses.contains(&test.status) {
                return false;
            }
        }
        if let Some(wanted) = &self.tags {
            let have = test.tags.as_deref().unwrap_or(&[]);
            if !wanted.iter().all(|w| have.contains(w)) {
                return false;
            }
        }
        if let Some(suite) = &self.suite {
            if test.suite.as_deref() != Some(suite.as_str()) {
                return false;
            }
        }
        if let Some(kind) = &self.kind {
            if test.kind.as_deref() != Some(kind.as_str()) {
                return false;
            }
        }
        if let Some(browser) = &self.browser {
            if test.browser.as_deref() != Some(browser.as_str()) {
                return false;
            }
        }
        if let Some(device) = &self.device {
            if test.device.as_deref() != Some(device.as_str()) {
                return false;
            }
        }
        if let Some(flaky) = self.flaky {
            if test.flaky.unwrap_or(false) != flaky {
                return false;
            }
        }
        true
    }
}

/// Builds a new report containing only the matching tests, with the
/// summary counters recomputed from the survivors.
#[must_use]
pub fn filter_report(report: &Report, criteria: &FilterCriteria) -> Report {
    let tests: Vec<TestRecord> = report
        .results
        .tests
        .iter()
        .filter(|t| criteria.matches(t))
        .cloned()
        .collect();

    let mut summary = Summary::from_tests(&tests);
    summary.start = report.results.summary.start;
    summary.stop = report.results.summary.stop;
    summary.extra = report.results.summary.extra.clone();

    let mut filtered = report.clone();
    filtered.results.summary = summary;
    filtered.results.tests = tests;
    filtered
}
