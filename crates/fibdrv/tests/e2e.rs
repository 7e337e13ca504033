//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibdrv() -> Command {
    let mut cmd = Command::cargo_bin("fibdrv").expect("binary not found");
    cmd.env_remove("FIBDRV_INDEX")
        .env_remove("FIBDRV_BUFFER")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    fibdrv()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibdrv()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibdrv"));
}

#[test]
fn read_f10_quiet() {
    fibdrv()
        .args(["-n", "10", "-q"])
        .assert()
        .success()
        .stdout("55\n");
}

#[test]
fn read_f0_default() {
    fibdrv()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "at offset 0, returned the sequence 0.",
        ));
}

#[test]
fn verbose_prints_engine_header() {
    fibdrv()
        .args(["-n", "10", "-v", "--algo", "iterative"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== fibdrv (Iterative) ==="));
}

#[test]
fn read_clamps_large_index() {
    fibdrv()
        .args(["-n", "10000", "-q", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("13942322456169788013972438287040728395"));
}

#[test]
fn read_clamps_negative_index() {
    fibdrv()
        .args(["-n", "-10", "-q"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn whence_end_subtracts() {
    // MAX_LENGTH - 480 = 20
    fibdrv()
        .args(["-n", "480", "--whence", "end", "-q"])
        .assert()
        .success()
        .stdout("6765\n");
}

#[test]
fn json_records_seek_origin() {
    let output = fibdrv()
        .args(["-n", "480", "--whence", "end", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["whence"], "end");
    assert_eq!(value["position"], 20);
}

#[test]
fn iterative_algorithm() {
    fibdrv()
        .args(["-n", "100", "--algo", "iterative", "-q"])
        .assert()
        .success()
        .stdout("354224848179261915075\n");
}

#[test]
fn invalid_algo() {
    fibdrv()
        .args(["-n", "100", "--algo", "matrix"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown calculator"))
        .stderr(predicate::str::contains("hint:").not());
}

#[test]
fn buffer_too_small() {
    fibdrv()
        .args(["-n", "100", "--buffer", "8"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("read buffer too small"));
}

#[test]
fn json_output() {
    let output = fibdrv()
        .args(["-n", "20", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["whence"], "start");
    assert_eq!(value["position"], 20);
    assert_eq!(value["digits"], "6765");
    assert_eq!(value["algorithm"], "FastDoubling");
    assert!(value["duration_ns"].is_u64());
}

#[test]
fn writes_before_any_read_return_zero() {
    fibdrv()
        .args(["--writes", "3", "-n", "5", "-q"])
        .assert()
        .success()
        .stdout("0\n0\n0\n5\n");
}

#[test]
fn sweep_reads_forward_and_back() {
    let output = fibdrv()
        .args(["--sweep", "-q"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1002);
    assert_eq!(lines[10], "55");
    assert_eq!(lines[500].len(), 105);
    assert_eq!(lines[1001], "0");
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("result.txt");
    fibdrv()
        .args(["-n", "100", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim(), "354224848179261915075");
}

#[test]
fn shell_completion_bash() {
    fibdrv()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibdrv"));
}
