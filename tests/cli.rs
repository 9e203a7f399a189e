//! End-to-end runs of the `trigtable` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn trigtable(dir: &tempfile::TempDir) -> Command {
    let mut command = Command::cargo_bin("trigtable").unwrap();
    command.current_dir(dir.path());
    command
}

#[test]
fn batch_writes_result_txt() {
    let dir = tempfile::tempdir().unwrap();

    trigtable(&dir)
        .arg("batch")
        .write_stdin("1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0000\t1.0000"))
        .stdout(predicate::str::contains("Results saved to file result.txt"));

    let file = fs::read_to_string(dir.path().join("result.txt")).unwrap();
    assert_eq!(file, "x\t\ty(x)\n------------------------\n1.0000\t1.0000\n");
}

#[test]
fn batch_is_the_default_mode() {
    let dir = tempfile::tempdir().unwrap();

    trigtable(&dir)
        .write_stdin("0\n0\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0000\tundefined"));

    assert!(dir.path().join("result.txt").exists());
}

#[test]
fn batch_rejects_non_positive_step() {
    let dir = tempfile::tempdir().unwrap();

    trigtable(&dir)
        .arg("batch")
        .write_stdin("0\n1\n-1\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: step must be positive!"));

    assert!(!dir.path().join("result.txt").exists());
}

#[test]
fn batch_rejects_reversed_interval() {
    let dir = tempfile::tempdir().unwrap();

    trigtable(&dir)
        .arg("batch")
        .write_stdin("5\n1\n1\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: start must be less than end!"));
}

#[test]
fn batch_fails_on_unopenable_file() {
    let dir = tempfile::tempdir().unwrap();

    trigtable(&dir)
        .args(["batch", "--output", "no/such/dir/result.txt"])
        .write_stdin("0\n1\n0.5\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: failed to create file"));
}

#[test]
fn batch_reads_scan_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("scan.json"), r#"{"start": 0.0, "end": 1.0, "step": 0.25}"#).unwrap();

    trigtable(&dir)
        .args(["batch", "--config", "scan.json", "--output", "table.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter").not());

    let file = fs::read_to_string(dir.path().join("table.txt")).unwrap();
    assert_eq!(file.lines().count(), 2 + 5);
}

#[test]
fn interactive_appends_accepted_values() {
    let dir = tempfile::tempdir().unwrap();

    trigtable(&dir)
        .arg("interactive")
        .write_stdin("1\ny\n3.14159265\ny\n0.5\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: function is undefined"))
        .stdout(predicate::str::contains("Processed 3 value(s), 1 undefined."));

    let file = fs::read_to_string(dir.path().join("results.txt")).unwrap();
    assert_eq!(file.lines().count(), 8);
    assert!(file.contains("x      = 0.5000"));
}
