use std::fmt::Write as _;
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn summary() -> Command {
    Command::cargo_bin("concurio-summary").expect("Failed to find concurio-summary binary")
}

/// Two series of 0..249 crop to 100..=199 each: both means are 149.5, so the
/// spread and the interval collapse to zero.
fn two_identical_series_log() -> String {
    let mut log = String::from("write-time\n");
    for id in [1, 2] {
        for v in 0..250 {
            writeln!(log, "{}: {}", id, v).unwrap();
        }
    }
    log
}

#[test]
fn summarizes_write_time_log_from_stdin() {
    summary()
        .write_stdin(two_identical_series_log())
        .assert()
        .success()
        .stdout("149.5, 0, 2, 0\n");
}

#[test]
fn summarizes_write_time_log_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("run.log");
    fs::write(&path, two_identical_series_log()).unwrap();

    summary()
        .arg("100")
        .arg(&path)
        .assert()
        .success()
        .stdout("149.5, 0, 2, 0\n");
}

#[test]
fn reports_known_value_statistics() {
    // Per-series means 1, 2, 3: mean 2, sample stddev 1, N 3,
    // half-width 1.95996 / sqrt(3).
    let log = "write-time\n1: 1\n2: 2\n3: 3\n";
    summary()
        .arg("0")
        .write_stdin(log)
        .assert()
        .success()
        .stdout("2, 1, 3, 1.13158\n");
}

#[test]
fn rejects_non_write_time_mode_with_empty_stdout() {
    let log = "event\n1: 10\n2: 20\n";
    summary()
        .write_stdin(log)
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn rejects_series_exhausted_by_cropping() {
    // 250 samples per series cannot survive two 125-wide crops.
    summary()
        .arg("125")
        .write_stdin(two_identical_series_log())
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("insufficient samples"));
}

#[test]
fn rejects_malformed_record_line() {
    summary()
        .write_stdin("write-time\n1: 10\nnot a record\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn rejects_header_only_log() {
    // Zero series means zero samples; the tool must fail rather than print a
    // NaN interval.
    summary()
        .write_stdin("write-time\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("insufficient samples"));
}

#[test]
fn rejects_empty_input() {
    summary()
        .write_stdin("")
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn rejects_missing_input_file() {
    summary()
        .arg("100")
        .arg("/nonexistent/run.log")
        .assert()
        .code(1)
        .stdout("");
}
