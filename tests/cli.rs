use std::ffi::OsStr;
use std::fs;

use assert_cmd::{assert::Assert, Command};
use predicates::prelude::*;
use serde_json::Value;

mod stubs;

fn run(subcommand: &str, config_path: impl AsRef<OsStr>) -> Assert {
    let mut cmd = Command::cargo_bin("hmrfb").unwrap();
    cmd.env("LOGGING_LEVEL", "warn")
        .arg(subcommand)
        .arg(config_path)
        .assert()
}

fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn validate_prints_tightened_uart() {
    let tempdir = tempfile::tempdir().unwrap();
    let path = write_config(&tempdir, stubs::config::MINIMAL);

    let assert = run("validate", &path).success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let config: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(config["uart"][0]["baud_rate"], 115200);
    assert_eq!(config["uart"][0]["parity"], "NONE");
    assert_eq!(config["hm_rf_bridge"][0]["update_interval"], "10s");
}

#[test]
fn build_lists_scheduled_components() {
    let tempdir = tempfile::tempdir().unwrap();
    let path = write_config(&tempdir, stubs::config::INTERVAL_30S);

    run("build", &path)
        .success()
        .stdout(predicate::str::contains("bridge priority=250 update_interval=30s"))
        .stdout(predicate::str::contains("uart_bus priority=1000"));
}

#[test]
fn conflicting_config_fails() {
    let tempdir = tempfile::tempdir().unwrap();
    let path = write_config(&tempdir, stubs::config::CONFLICTING_BAUD_RATE);

    run("validate", &path)
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "Error: hm_rf_bridge requires baud_rate = 115200, but it is configured as 9600",
        ));
}

#[test]
fn wifi_advisory_is_logged() {
    let tempdir = tempfile::tempdir().unwrap();
    let path = write_config(&tempdir, stubs::config::WIFI);

    run("validate", &path)
        .success()
        .stderr(predicate::str::contains("not recommended to use this component with WiFi"));
}

#[test]
fn missing_file_fails() {
    let tempdir = tempfile::tempdir().unwrap();
    run("build", tempdir.path().join("nope.json"))
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("hmrfb").unwrap();
    cmd.arg("flash")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Subcommand must be one of 'validate', 'build'",
        ));
}
