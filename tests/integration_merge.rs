// tests/integration_merge.rs
//! End-to-end merge tests driving the built binary in temp dirs.

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const REPORT_1: &str = r#"{"results":{"tool":{"name":"test-tool"},
    "summary":{"tests":2,"passed":1,"failed":1,"skipped":0,"pending":0,
               "other":0,"start":1708979371669,"stop":1708979388927},
    "tests":[{"name":"test 1","status":"passed","duration":100},
             {"name":"test 2","status":"failed","duration":200}]}}"#;

const REPORT_2: &str = r#"{"results":{"tool":{"name":"test-tool"},
    "summary":{"tests":1,"passed":1,"failed":0,"skipped":0,"pending":0,
               "other":0,"start":1708979400000,"stop":1708979410000},
    "tests":[{"name":"test 3","status":"passed","duration":150}]}}"#;

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let reports = dir.path().join("reports");
    fs::create_dir(&reports).unwrap();
    fs::write(reports.join("report1.json"), REPORT_1).unwrap();
    fs::write(reports.join("report2.json"), REPORT_2).unwrap();
    dir
}

fn run_merge(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ctrf"))
        .arg("merge")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to execute ctrf")
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn merges_counters_tests_and_window() {
    let dir = workspace();
    let out = run_merge(dir.path(), &["reports", "-o", "merged.json"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let merged = read_json(&dir.path().join("merged.json"));
    let summary = &merged["results"]["summary"];
    assert_eq!(summary["tests"], 3);
    assert_eq!(summary["passed"], 2);
    assert_eq!(summary["failed"], 1);
    assert_eq!(summary["skipped"], 0);
    assert_eq!(summary["pending"], 0);
    assert_eq!(summary["other"], 0);
    assert_eq!(summary["start"], 1_708_979_371_669_u64);
    assert_eq!(summary["stop"], 1_708_979_410_000_u64);

    let tests = merged["results"]["tests"].as_array().unwrap();
    assert_eq!(tests.len(), 3);
    assert_eq!(tests[0]["name"], "test 1");
    assert_eq!(tests[1]["name"], "test 2");
    assert_eq!(tests[2]["name"], "test 3");
}

#[test]
fn sources_are_deleted_by_default() {
    let dir = workspace();
    let out = run_merge(dir.path(), &["reports", "-o", "merged.json"]);
    assert!(out.status.success());

    assert!(!dir.path().join("reports/report1.json").exists());
    assert!(!dir.path().join("reports/report2.json").exists());
    assert!(dir.path().join("merged.json").is_file());
}

#[test]
fn keep_reports_retains_sources() {
    let dir = workspace();
    let out = run_merge(dir.path(), &["reports", "-o", "merged.json", "-k"]);
    assert!(out.status.success());

    assert!(dir.path().join("reports/report1.json").is_file());
    assert!(dir.path().join("reports/report2.json").is_file());
}

#[test]
fn output_inside_input_directory_survives_retention() {
    let dir = workspace();
    let out = run_merge(dir.path(), &["reports", "-o", "reports/ctrf-report.json"]);
    assert!(out.status.success());

    assert!(dir.path().join("reports/ctrf-report.json").is_file());
    assert!(!dir.path().join("reports/report1.json").exists());
    assert!(!dir.path().join("reports/report2.json").exists());
}

#[test]
fn dot_dot_spelled_output_inside_input_directory_survives_retention() {
    let dir = workspace();
    let out = run_merge(
        dir.path(),
        &["reports", "-o", "reports/../reports/report1.json"],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let merged = read_json(&dir.path().join("reports/report1.json"));
    assert_eq!(merged["results"]["summary"]["tests"], 3);
    assert!(!dir.path().join("reports/report2.json").exists());
}

#[test]
fn trailing_separator_creates_directory_with_default_filename() {
    let dir = workspace();
    let out = run_merge(dir.path(), &["reports", "-o", "output/"]);
    assert!(out.status.success());

    assert!(dir.path().join("output/ctrf-report.json").is_file());
}

#[test]
fn nested_output_path_creates_all_ancestors() {
    let dir = workspace();
    let out = run_merge(dir.path(), &["reports", "-o", "deep/nested/output/merged.json"]);
    assert!(out.status.success());

    let merged = read_json(&dir.path().join("deep/nested/output/merged.json"));
    assert_eq!(merged["results"]["summary"]["tests"], 3);
}

#[test]
fn undecodable_file_is_skipped_with_a_warning() {
    let dir = workspace();
    fs::write(dir.path().join("reports/garbage.json"), "{ not json").unwrap();

    let out = run_merge(dir.path(), &["reports", "-o", "merged.json"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("skipping"), "stderr: {stderr}");

    let merged = read_json(&dir.path().join("merged.json"));
    assert_eq!(merged["results"]["summary"]["tests"], 3);
}

#[test]
fn deprecated_output_dir_still_works_and_warns() {
    let dir = workspace();
    let out = run_merge(
        dir.path(),
        &["reports", "-o", "my-report.json", "-d", "legacy-out"],
    );
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("deprecated"), "stderr: {stderr}");
    assert!(dir.path().join("legacy-out/my-report.json").is_file());
}

#[test]
fn tool_policy_last_takes_final_tool_metadata() {
    let dir = workspace();
    let out = run_merge(
        dir.path(),
        &["reports", "-o", "merged.json", "--tool-policy", "last", "-k"],
    );
    assert!(out.status.success());

    let merged = read_json(&dir.path().join("merged.json"));
    assert_eq!(merged["results"]["tool"]["name"], "test-tool");
}

#[test]
fn ctrf_toml_supplies_merge_defaults() {
    let dir = workspace();
    fs::write(
        dir.path().join("ctrf.toml"),
        "[merge]\noutput = \"from-config.json\"\nkeep_reports = true\n",
    )
    .unwrap();

    let out = run_merge(dir.path(), &["reports"]);
    assert!(out.status.success());
    assert!(dir.path().join("from-config.json").is_file());
    assert!(dir.path().join("reports/report1.json").is_file());
}
