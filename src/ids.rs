// src/ids.rs
//! Report and test identifier generation.
//!
//! Report identifiers are random (a fresh UUID per invocation); test
//! identifiers are deterministic, derived from suite and name, so the
//! same test gets the same id across runs and tools.

use crate::report::{Report, TestRecord};
use sha2::{Digest, Sha256};
use std::fmt::Write;
use uuid::Uuid;

/// Generates a fresh random report identifier.
#[must_use]
pub fn generate_report_id() -> String {
    Uuid::new_v4().to_string()
}

/// Stamps the report with a fresh identifier, returning it.
pub fn assign_report_id(report: &mut Report) -> String {
    let id = generate_report_id();
    report.report_id = Some(id.clone());
    id
}

/// Derives the deterministic identifier for a test: SHA-256 over
/// suite and name (NUL-separated so the pair is unambiguous),
/// truncated to 32 hex characters.
#[must_use]
pub fn test_id(test: &TestRecord) -> String {
    let mut hasher = Sha256::new();
    hasher.update(test.suite.as_deref().unwrap_or("").as_bytes());
    hasher.update([0u8]);
    hasher.update(test.name.as_bytes());
    let digest = hasher.finalize();

    digest.iter().take(16).fold(String::new(), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}

/// Assigns every test its deterministic identifier, returning how
/// many were stamped.
pub fn assign_test_ids(report: &mut Report) -> usize {
    for test in &mut report.results.tests {
        test.id = Some(test_id(test));
    }
    report.results.tests.len()
}
