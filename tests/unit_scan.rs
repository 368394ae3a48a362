// tests/unit_scan.rs
use ctrf_core::error::CtrfError;
use ctrf_core::merge::scan::scan_directory;
use std::fs;
use tempfile::TempDir;

const VALID: &str = r#"{"results":{"tool":{"name":"t"},
    "summary":{"tests":1,"passed":1,"failed":0,"skipped":0,
               "pending":0,"other":0,"start":1,"stop":2},
    "tests":[{"name":"a","status":"passed","duration":5}]}}"#;

fn dir_with(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

#[test]
fn missing_directory_is_path_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(
        scan_directory(&missing),
        Err(CtrfError::PathNotFound(_))
    ));
}

#[test]
fn file_path_is_not_a_directory() {
    let dir = dir_with(&[("report.json", VALID)]);
    assert!(matches!(
        scan_directory(&dir.path().join("report.json")),
        Err(CtrfError::NotADirectory(_))
    ));
}

#[test]
fn empty_directory_yields_no_candidates() {
    let dir = tempfile::tempdir().unwrap();
    assert!(scan_directory(dir.path()).unwrap().is_empty());
}

#[test]
fn skips_undecodable_and_non_json_files() {
    let dir = dir_with(&[
        ("a.json", VALID),
        ("broken.json", "{ not json"),
        ("wrong-shape.json", r#"{"results":{}}"#),
        ("notes.txt", VALID),
        ("c.json", VALID),
    ]);

    let sources = scan_directory(dir.path()).unwrap();
    let names: Vec<String> = sources
        .iter()
        .map(|s| s.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.json", "c.json"]);
}

#[test]
fn candidates_come_back_in_lexicographic_order() {
    let dir = dir_with(&[("b.json", VALID), ("a.json", VALID), ("z.json", VALID)]);
    let sources = scan_directory(dir.path()).unwrap();
    let names: Vec<String> = sources
        .iter()
        .map(|s| s.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.json", "b.json", "z.json"]);
}

#[test]
fn candidate_paths_are_absolute() {
    let dir = dir_with(&[("a.json", VALID)]);
    let sources = scan_directory(dir.path()).unwrap();
    assert!(sources[0].path.is_absolute());
}

#[test]
fn subdirectories_are_not_descended_into() {
    let dir = dir_with(&[("a.json", VALID)]);
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("b.json"), VALID).unwrap();

    let sources = scan_directory(dir.path()).unwrap();
    assert_eq!(sources.len(), 1);
}
