//! End-to-end tests for the roimap binary.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn roimap(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_roimap"));
    cmd.current_dir(dir.path()).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_report_json_with_defaults() {
    let dir = TempDir::new().unwrap();

    let output = roimap(&dir)
        .args(["report", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["metadata"]["currency"], "usd");
    let mid = json["savings"]["total"]["mid"].as_f64().unwrap();
    assert!((mid - 419_200.0).abs() < 1e-6);
    assert_eq!(json["realization"]["current_month"], 1);
    assert_eq!(json["charts"]["benefits_vs_costs"].as_array().unwrap().len(), 3);
}

#[test]
fn test_report_reads_config_and_overrides() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".roimap.toml"),
        "[usage]\ncurrent_month = 6\nactual_work_orders = 208\n\n[display]\ncurrency = \"eur\"\n",
    )
    .unwrap();

    let output = roimap(&dir)
        .args([
            "report",
            "-f",
            "json",
            "--set",
            "actual_forward_predictions=56",
            "--set",
            "actual_inverse_predictions=130",
        ])
        .assert()
        .success()
        .get_output()
        .clone();

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["metadata"]["currency"], "eur");
    let realized = json["realization"]["realized_value_to_date"].as_f64().unwrap();
    assert!((realized - 152_169.6 * 0.92).abs() < 1e-3);
    assert_eq!(json["realization"]["realized_path"].as_array().unwrap().len(), 6);
}

#[test]
fn test_currency_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".roimap.toml"), "[display]\ncurrency = \"eur\"\n").unwrap();

    let output = roimap(&dir)
        .args(["report", "-f", "json", "--currency", "jpy"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["metadata"]["symbol"], "¥");
}

#[test]
fn test_currency_flag_replaces_invalid_config_currency() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".roimap.toml"), "[display]\ncurrency = \"gbp\"\n").unwrap();

    roimap(&dir).args(["report", "-f", "json"]).assert().failure();

    let output = roimap(&dir)
        .args(["report", "-f", "json", "--currency", "eur"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["metadata"]["symbol"], "€");
}

#[test]
fn test_broken_discovered_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a");
    fs::create_dir(&nested).unwrap();
    fs::write(dir.path().join(".roimap.toml"), "[labor]\nhourly_rate = 120\n").unwrap();

    let validate = roimap(&dir)
        .arg("validate")
        .assert()
        .code(2)
        .get_output()
        .clone();
    let stderr = String::from_utf8(validate.stderr).unwrap();
    assert!(stderr.contains("hourly_rate"));
    assert!(stderr.contains(".roimap.toml"));

    let report = roimap(&dir)
        .current_dir(&nested)
        .args(["report", "-f", "json"])
        .assert()
        .failure()
        .get_output()
        .clone();
    assert!(report.stdout.is_empty());
    assert!(String::from_utf8(report.stderr).unwrap().contains("hourly_rate"));
}

#[test]
fn test_report_writes_markdown_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("roi.md");

    roimap(&dir)
        .args(["report", "-f", "markdown", "-o"])
        .arg(&out)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("# ROI Report"));
    assert!(text.contains("Executive Summary"));
}

#[test]
fn test_terminal_report_is_plain_without_color() {
    let dir = TempDir::new().unwrap();

    let output = roimap(&dir)
        .args(["report", "--plain"])
        .assert()
        .success()
        .get_output()
        .clone();

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("ROI Dashboard"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn test_validate_reports_every_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".roimap.toml"),
        "[labor]\nhourly_cost = -80\n\n[usage]\ncurrent_month = 13\n",
    )
    .unwrap();

    let output = roimap(&dir)
        .args(["validate", "--set", "no_such_field=1"])
        .assert()
        .code(2)
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Found 3 problem(s)"));
    assert!(stderr.contains("hourly_cost"));
    assert!(stderr.contains("current_month"));
    assert_eq!(stderr.matches("no_such_field").count(), 1);
    assert!(stderr.contains("Error: Validation error: 3 problem(s) in inputs"));
}

#[test]
fn test_validate_accepts_defaults() {
    let dir = TempDir::new().unwrap();

    roimap(&dir).arg("validate").assert().success();
}

#[test]
fn test_report_refuses_invalid_inputs() {
    let dir = TempDir::new().unwrap();

    roimap(&dir)
        .args(["report", "--set", "prediction_weight=0.9"])
        .assert()
        .code(2);
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    roimap(&dir).arg("init").assert().success();
    assert!(dir.path().join(".roimap.toml").is_file());

    roimap(&dir).arg("init").assert().failure();
    roimap(&dir).args(["init", "--force"]).assert().success();

    // the written file drives a valid report
    roimap(&dir).arg("validate").assert().success();
}

#[test]
fn test_drivers_lists_catalog() {
    let dir = TempDir::new().unwrap();

    let output = roimap(&dir)
        .args(["drivers", "--currency", "krw"])
        .assert()
        .success()
        .get_output()
        .clone();

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("form_adj"));
    assert!(text.contains("AI 배합 조정"));
}
