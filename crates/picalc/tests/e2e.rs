//! End-to-end CLI integration tests.

use std::path::Path;

use assert_cmd::Command;
use image::{GrayImage, Luma};
use predicates::prelude::*;

fn picalc() -> Command {
    let mut cmd = Command::cargo_bin("picalc").expect("binary not found");
    cmd.env_remove("PICALC_FORMULA").env("NO_COLOR", "1");
    cmd
}

/// 20x8 image with a dark left half.
fn write_half_dark(path: &Path) {
    GrayImage::from_fn(20, 8, |x, _| if x < 10 { Luma([0u8]) } else { Luma([255u8]) })
        .save(path)
        .unwrap();
}

#[test]
fn help_flag() {
    picalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pi"))
        .stdout(predicate::str::contains("--test-formulas"));
}

#[test]
fn version_flag() {
    picalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("picalc"));
}

#[test]
fn raw_bbp_ten_digits() {
    picalc()
        .args(["-r", "-f", "bbp", "-w", "10"])
        .assert()
        .success()
        .stdout("3141592653\n");
}

#[test]
fn raw_default_formula_uses_width() {
    picalc()
        .args(["-r", "-w", "20"])
        .assert()
        .success()
        .stdout("31415926535897932384\n");
}

#[test]
fn raw_precision_overrides_width() {
    picalc()
        .args(["-r", "-f", "machin", "-w", "10", "-p", "3"])
        .assert()
        .success()
        .stdout("314\n");
}

#[test]
fn raw_formula_from_env() {
    picalc()
        .env("PICALC_FORMULA", "machin")
        .args(["-r", "-w", "5"])
        .assert()
        .success()
        .stdout("31415\n");
}

#[test]
fn raw_all_formulas() {
    picalc()
        .args(["-r", "-f", "all", "-w", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bbp"))
        .stdout(predicate::str::contains("machin"))
        .stdout(predicate::str::contains("agm"))
        .stdout(predicate::str::contains("31415"));
}

#[test]
fn raw_to_output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("pi.txt");
    picalc()
        .args(["-r", "-f", "agm", "-w", "8", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "31415926\n");
}

#[test]
fn unknown_formula_exit_code() {
    picalc()
        .args(["-r", "-f", "nonexistent"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown formula: nonexistent"));
}

#[test]
fn zero_precision_fails() {
    picalc()
        .args(["-r", "-p", "0"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid precision"));
}

#[test]
fn oversized_guard_exit_code() {
    picalc()
        .args(["-r", "-w", "5", "--guard-digits"])
        .arg(usize::MAX.to_string())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn raw_all_formulas_with_output_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("pi.txt");
    picalc()
        .args(["-r", "-f", "all", "-w", "8", "-o"])
        .arg(&path)
        .assert()
        .code(4)
        .stdout("")
        .stderr(predicate::str::contains("--output needs a single formula"));
    assert!(!path.exists());
}

#[test]
fn iteration_cap_exit_code() {
    picalc()
        .args(["-r", "-f", "machin", "--max-iterations", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("did not converge"));
}

#[test]
fn self_test_all_formulas() {
    picalc()
        .args(["--test-formulas", "-p", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[PASS]"))
        .stdout(predicate::str::contains("3 formulas passed"));
}

#[test]
fn self_test_one_formula_json() {
    let output = picalc()
        .args(["--test-formula", "bbp", "-p", "50", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let report = &reports[0];
    assert_eq!(reports.as_array().unwrap().len(), 1);
    assert_eq!(report["precision"], 50);
    assert_eq!(report["entries"][0]["name"], "bbp");
    assert_eq!(report["entries"][0]["passed"], true);
    assert!(report["entries"][0]["mismatch_index"].is_null());
}

#[test]
fn self_test_default_precision_ladder() {
    let output = picalc()
        .args(["--test-formula", "machin", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let precisions: Vec<u64> = reports
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["precision"].as_u64().unwrap())
        .collect();
    assert_eq!(precisions, vec![11, 101, 1001, 10_001]);
    assert!(reports
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["entries"][0]["passed"] == true));
}

#[test]
fn self_test_small_guard_still_passes() {
    picalc()
        .args(["--test-formulas", "-p", "120", "--guard-digits", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[FAIL]").not());
}

#[test]
fn self_test_quiet() {
    picalc()
        .args(["--test-formulas", "-p", "20", "-q"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn self_test_unknown_formula() {
    picalc()
        .args(["--test-formula", "nope"])
        .assert()
        .code(4);
}

#[test]
fn self_test_beyond_reference() {
    picalc()
        .args(["--test-formulas", "-p", "10002"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("reference digits"));
}

#[test]
fn self_test_flags_conflict() {
    picalc()
        .args(["--test-formulas", "--test-formula", "bbp"])
        .assert()
        .failure();
}

#[test]
fn art_mode_fills_dark_cells() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("half.png");
    write_half_dark(&path);

    let output = picalc()
        .args(["-w", "20", "-l", "8", "-f", "machin", "-s"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let art = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = art.lines().collect();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], format!("3141592653{}", " ".repeat(10)));
    assert_eq!(rows[1].trim_end(), "5897932384");
}

#[test]
fn art_mode_inverted() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("half.png");
    write_half_dark(&path);

    let output = picalc()
        .args(["-w", "20", "-l", "8", "-i", "-s"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let art = String::from_utf8(output.stdout).unwrap();
    let first = art.lines().next().unwrap();
    assert_eq!(first, format!("{}3141592653", " ".repeat(10)));
}

#[test]
fn art_missing_image() {
    picalc()
        .args(["-s", "/nonexistent/pi.png"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("/nonexistent/pi.png"));
}

#[test]
fn completion_bash() {
    picalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("picalc"));
}
