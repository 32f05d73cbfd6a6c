//! Integration tests for the breathbox CLI.
//!
//! Only non-interactive commands are exercised here; the TUI needs a
//! terminal. `HOME` is pointed at a temp dir so a real config file cannot
//! leak into the tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn breathbox(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("breathbox").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn plan_shows_phases_and_total() {
    let home = TempDir::new().unwrap();
    breathbox(&home)
        .args(["plan", "--inhale", "4", "--exhale", "6", "--laps", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inhale"))
        .stdout(predicate::str::contains("Exhale hold"))
        .stdout(predicate::str::contains("Total time"));
}

#[test]
fn plan_json_is_parseable() {
    let home = TempDir::new().unwrap();
    let output = breathbox(&home)
        .args(["plan", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    // Built-in defaults: 5+5+5 seconds, 2 laps.
    assert_eq!(value["laps"], 2);
    assert_eq!(value["total_seconds"], 30);
}

#[test]
fn plan_rejects_zero_required_phase() {
    let home = TempDir::new().unwrap();
    breathbox(&home)
        .args(["plan", "--inhale", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Inhale"))
        .stderr(predicate::str::contains("greater than 0"));
}

#[test]
fn plan_rejects_unparseable_duration() {
    let home = TempDir::new().unwrap();
    breathbox(&home)
        .args(["plan", "--exhale", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--exhale"));
}

#[test]
fn plan_reads_defaults_from_config_file() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".breathbox");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(
        root.join("config.yaml"),
        "exercise:\n  inhale_secs: 10\n  laps: 1\n",
    )
    .unwrap();

    let output = breathbox(&home)
        .args(["plan", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["laps"], 1);
    assert_eq!(value["total_seconds"], 20); // 10 + 5 + 5
}

#[test]
fn completions_emit_script() {
    let home = TempDir::new().unwrap();
    breathbox(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("breathbox"));
}

#[test]
fn completions_reject_unknown_shell() {
    let home = TempDir::new().unwrap();
    breathbox(&home)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}
