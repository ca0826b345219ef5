//! CLI integration tests for the load/error paths.
//!
//! The success path opens an interactive terminal UI and is exercised
//! manually; these tests pin down the failure modes, all of which abort
//! before any terminal state is touched.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn meander() -> Command {
    Command::cargo_bin("meander").unwrap()
}

fn route_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn missing_file_fails_with_open_error() {
    meander()
        .arg("no_such_route.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open file"));
}

#[test]
fn default_convention_path_is_result_txt() {
    let dir = tempdir().unwrap();
    meander()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("result.txt"));
}

#[test]
fn non_numeric_coordinate_aborts_with_line_number() {
    let file = route_file("0 0\nabc 1.0\n");
    meander()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(":2:"))
        .stderr(predicate::str::contains("invalid coordinate 'abc'"));
}

#[test]
fn short_line_aborts() {
    let file = route_file("1.0\n");
    meander()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected two coordinates"));
}

#[test]
fn empty_file_fails_on_the_closing_segment() {
    let file = route_file("");
    meander()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty route"));
}
