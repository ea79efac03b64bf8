//! Tests that run a real report against the host's memory.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::winfree_command;

#[test]
fn test_default_report() {
    winfree_command(&[])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "                 total        used        free",
        ))
        .stdout(predicate::str::contains("\nMem:"))
        .stdout(predicate::str::contains("\nSwap:"))
        .stdout(predicate::str::contains(" MiB\n"))
        .stdout(predicate::str::contains("Total:").not());
}

#[test]
fn test_units() {
    for (flag, label) in [("-b", " B\n"), ("-k", " KiB\n"), ("--mebi", " MiB\n"), ("-g", " GiB\n")] {
        winfree_command(&[flag])
            .assert()
            .success()
            .stdout(predicate::str::contains(label));
    }
}

#[test]
fn test_human_with_total() {
    winfree_command(&["-h", "-t"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\nTotal:"))
        .stdout(predicate::str::contains("MiB").not());
}

#[test]
fn test_no_interval_reports_once() {
    let output = winfree_command(&["-c", "3"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).matches("Mem:").count(), 1);
}

#[test]
fn test_interval_with_count() {
    let output = winfree_command(&["-s", "1", "-c", "2"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).matches("Mem:").count(), 2);
}
