// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end tests of the `lotto` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_end_to_end_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("combinations.txt");
    fs::write(&input, "5 9 14 22 28 33 41\n").unwrap();

    Command::cargo_bin("lotto")
        .unwrap()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total combinations before filtering: 7",
        ))
        .stdout(predicate::str::contains(
            "Total combinations after filtering: 7",
        ));

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "[5, 9, 14, 22, 28, 33]");
    assert_eq!(lines[6], "[9, 14, 22, 28, 33, 41]");
}

#[test]
fn test_bad_tokens_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("combinations.txt");
    // Duplicates, out-of-range numbers, and non-integer tokens are dropped,
    // leaving the same seven-number pool as the clean run.
    fs::write(&input, "5 banana 9 14 99 22 5 28 0 33 41\n").unwrap();

    Command::cargo_bin("lotto")
        .unwrap()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total combinations after filtering: 7",
        ));
}

#[test]
fn test_zero_valid_combinations_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("combinations.txt");
    fs::write(&input, "1 2 3 4 5 6 7\n").unwrap();

    Command::cargo_bin("lotto")
        .unwrap()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There were no combinations after filtering!",
        ));

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_undersized_pool_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "1 2 3 4 5 6\n").unwrap();

    Command::cargo_bin("lotto")
        .unwrap()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("combinations.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 7 and 49"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("lotto")
        .unwrap()
        .arg("--input")
        .arg(dir.path().join("does-not-exist.txt"))
        .arg("--output")
        .arg(dir.path().join("combinations.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
