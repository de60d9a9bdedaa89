//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Declarations used across the suite, as TOML.
pub const STATUS_TOML: &str = r#"
[Status]
NONE = [0, "ALL"]
ACTIVE = 1
DISABLED = [2, "Disabled"]

[Order]
Z = 4
A = 2
C = 3
B = 1
L = 0
"#;

/// The same declarations as [`STATUS_TOML`], as JSON.
pub const STATUS_JSON: &str = r#"{
    "Status": { "NONE": [0, "ALL"], "ACTIVE": 1, "DISABLED": [2, "Disabled"] },
    "Order": { "Z": 4, "A": 2, "C": 3, "B": 1, "L": 0 }
}"#;

/// Write `contents` to `file_name` inside a fresh temp dir.
///
/// The returned `TempDir` must outlive any use of the path.
pub fn write_fixture(file_name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(file_name);
    fs::write(&path, contents).expect("write fixture");
    (dir, path)
}
