//! Edge case and error handling tests for sidenav


use harness::{TestDocs, run_sidenav};
use serde_json::Value;

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[cfg(unix)]
#[test]
fn test_symlink_to_markdown_file_is_a_page() {
    use std::os::unix::fs::symlink;

    let docs = TestDocs::new();
    docs.add_file("target.md", "# Target");
    symlink(docs.path().join("target.md"), docs.path().join("link.md"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_sidenav(docs.path(), &["--json", "."]);
    assert!(success);
    let sidebar: Value = serde_json::from_str(&stdout).unwrap();
    let entries = sidebar.as_array().unwrap();
    // Classification follows the link target, so both names appear
    assert!(entries.contains(&Value::String("/target.md".into())));
    assert!(entries.contains(&Value::String("/link.md".into())));
}

#[cfg(unix)]
#[test]
fn test_symlink_to_directory_is_traversed() {
    use std::os::unix::fs::symlink;

    let docs = TestDocs::new();
    docs.add_file("realdir/page.md", "# Page");
    symlink(docs.path().join("realdir"), docs.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_sidenav(docs.path(), &["--json", "."]);
    assert!(success);
    let sidebar: Value = serde_json::from_str(&stdout).unwrap();
    let titles: Vec<&str> = sidebar
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["title"].as_str())
        .collect();
    assert!(titles.contains(&"realdir"));
    assert!(titles.contains(&"linkdir"));
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_aborts_the_scan() {
    // A dangling symlink makes its stat fail; the scan aborts rather than
    // returning partial results
    use std::os::unix::fs::symlink;

    let docs = TestDocs::new();
    docs.add_file("page.md", "# Page");
    symlink(docs.path().join("gone.md"), docs.path().join("broken.md"))
        .expect("Failed to create dangling symlink");

    let (_stdout, stderr, success) = run_sidenav(docs.path(), &["--json", "."]);
    assert!(!success, "a failing stat aborts the scan");
    assert!(stderr.contains("cannot access"), "stderr: {}", stderr);
}

// ============================================================================
// Permission Edge Cases
// ============================================================================

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_propagates_error() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let docs = TestDocs::new();
    docs.add_file("page.md", "# Page");
    let locked = docs.add_dir("locked");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
        .expect("Failed to remove permissions");

    let (_stdout, _stderr, success) = run_sidenav(docs.path(), &["--json", "."]);

    // Restore so the temp dir can be cleaned up
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
        .expect("Failed to restore permissions");

    // Root bypasses mode bits; otherwise the error must propagate
    if effective_uid() != Some(0) {
        assert!(!success, "permission denial should abort the scan");
    }
}

#[cfg(unix)]
fn effective_uid() -> Option<u32> {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|s| {
            s.lines()
                .find(|l| l.starts_with("Uid:"))
                .and_then(|l| l.split_whitespace().nth(2))
                .and_then(|v| v.parse().ok())
        })
}

// ============================================================================
// CLI Error Reporting
// ============================================================================

#[test]
fn test_missing_path_reports_and_exits_nonzero() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    Command::cargo_bin("sidenav")
        .unwrap()
        .args(["--json", "definitely-not-here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot access 'definitely-not-here'"));
}

#[test]
fn test_file_as_root_fails() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    let docs = TestDocs::new();
    docs.add_file("page.md", "# Page");

    Command::cargo_bin("sidenav")
        .unwrap()
        .current_dir(docs.path())
        .args(["--json", "page.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot access"));
}

// ============================================================================
// Name Handling
// ============================================================================

#[test]
fn test_names_with_spaces_and_dots() {
    let docs = TestDocs::new();
    docs.add_file("getting started.md", "# Start");
    docs.add_file("v1.2/notes.md", "# Notes");

    let (stdout, _stderr, success) = run_sidenav(docs.path(), &["--json", "."]);
    assert!(success);
    let sidebar: Value = serde_json::from_str(&stdout).unwrap();
    let entries = sidebar.as_array().unwrap();
    assert!(entries.contains(&Value::String("/getting started.md".into())));
    assert!(
        entries
            .iter()
            .any(|e| e["title"] == "v1.2" && e["children"] == serde_json::json!(["/v1.2/notes.md"]))
    );
}

#[test]
fn test_md_named_directory_is_a_group_not_a_page() {
    // Classification is by stat, not by name suffix
    let docs = TestDocs::new();
    docs.add_file("weird.md/inner.md", "# Inner");

    let (stdout, _stderr, success) = run_sidenav(docs.path(), &["--json", "."]);
    assert!(success);
    let sidebar: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        sidebar,
        serde_json::json!([{"title": "weird.md", "children": ["/weird.md/inner.md"]}])
    );
}
