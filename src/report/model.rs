// src/report/model.rs
//! In-memory model of a CTRF document.
//!
//! The model is deliberately lenient: the only hard requirement is the
//! `results.tests` sequence. Counters and timestamps default to zero
//! when absent, and every unrecognized field is carried through a
//! flattened map so a decode/encode cycle never drops data produced by
//! other tools.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// A complete CTRF report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "reportFormat", skip_serializing_if = "Option::is_none")]
    pub report_format: Option<String>,
    #[serde(rename = "specVersion", skip_serializing_if = "Option::is_none")]
    pub spec_version: Option<String>,
    #[serde(rename = "reportId", skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,
    pub results: Results,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `results` object: tool metadata, summary, test list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results {
    #[serde(default)]
    pub tool: Tool,
    #[serde(default)]
    pub summary: Summary,
    pub tests: Vec<TestRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Metadata about the tool that produced the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Aggregate counters by status plus the session time window
/// (`start`/`stop` in epoch milliseconds).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub tests: u64,
    #[serde(default)]
    pub passed: u64,
    #[serde(default)]
    pub failed: u64,
    #[serde(default)]
    pub skipped: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub other: u64,
    #[serde(default)]
    pub start: u64,
    #[serde(default)]
    pub stop: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outcome of a single test.
///
/// A status string outside the recognized set decodes to
/// [`Unrecognized`](Self::Unrecognized) with the verbatim text, so
/// re-encoding preserves it and validation can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
    Other,
    Unrecognized(String),
}

impl TestStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
            Self::Pending => "pending",
            Self::Other => "other",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl FromStr for TestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passed" => Ok(Self::Passed),
            "failed" => Ok(Self::Failed),
            "skipped" => Ok(Self::Skipped),
            "pending" => Ok(Self::Pending),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown test status: {s}")),
        }
    }
}

impl Serialize for TestStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TestStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(Self::Unrecognized(raw)))
    }
}

/// One test execution. Only the fields the sibling commands inspect are
/// typed; everything else rides in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub name: String,
    pub status: TestStatus,
    #[serde(default)]
    pub duration: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flaky: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TestRecord {
    /// Creates a bare test record with the required fields only.
    #[must_use]
    pub fn new(name: impl Into<String>, status: TestStatus, duration: u64) -> Self {
        Self {
            name: name.into(),
            status,
            duration,
            id: None,
            suite: None,
            kind: None,
            browser: None,
            device: None,
            tags: None,
            flaky: None,
            retries: None,
            extra: Map::new(),
        }
    }
}

impl Summary {
    /// Sum of the per-status counters (everything except `tests`).
    #[must_use]
    pub fn counted(&self) -> u64 {
        self.passed + self.failed + self.skipped + self.pending + self.other
    }

    /// Recounts the per-status counters from a test list. The time
    /// window is left at zero; callers retain it when appropriate.
    #[must_use]
    pub fn from_tests(tests: &[TestRecord]) -> Self {
        let mut s = Self {
            tests: tests.len() as u64,
            ..Self::default()
        };
        for t in tests {
            match t.status {
                TestStatus::Passed => s.passed += 1,
                TestStatus::Failed => s.failed += 1,
                TestStatus::Skipped => s.skipped += 1,
                TestStatus::Pending => s.pending += 1,
                TestStatus::Other | TestStatus::Unrecognized(_) => s.other += 1,
            }
        }
        s
    }
}

impl Tool {
    /// Creates tool metadata with just a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}
