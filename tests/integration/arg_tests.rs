//! These tests are mostly here just to ensure that invalid arguments are
//! caught, and that help and version never touch the memory report.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::winfree_command;

#[test]
fn test_help() {
    winfree_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: winfree [OPTIONS]"))
        .stdout(predicate::str::contains("--seconds <N>"))
        .stdout(predicate::str::contains("Mem:").not());
}

#[test]
fn test_help_wins_over_other_flags() {
    winfree_command(&["-g", "--help", "-t"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: winfree [OPTIONS]"))
        .stdout(predicate::str::contains("Mem:").not());
}

#[test]
fn test_version() {
    winfree_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "winfree {}",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("Mem:").not());
}

#[test]
fn test_unknown_flag() {
    winfree_command(&["--bogus"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Argument error"))
        .stdout(predicate::str::contains("'--bogus'"))
        .stdout(predicate::str::contains("Usage: winfree [OPTIONS]"))
        .stdout(predicate::str::contains("Mem:").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_seconds_value() {
    winfree_command(&["-s"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--seconds"))
        .stdout(predicate::str::contains("Usage: winfree [OPTIONS]"));
}

#[test]
fn test_missing_count_value() {
    winfree_command(&["-t", "--count"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--count"));
}

#[test]
fn test_non_numeric_seconds() {
    winfree_command(&["--seconds", "often"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("'often'"));
}
