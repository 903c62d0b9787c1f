use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

fn tomato(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tomato").unwrap();
    cmd.env("TOMATO_CLOCK_HOME", home);
    cmd
}

#[test]
fn test_parse_text() {
    let home = tempfile::tempdir().unwrap();
    tomato(home.path())
        .args(["parse", "1h30m20s"])
        .assert()
        .success()
        .stdout("5420 (hour..sec)\n");
}

#[test]
fn test_parse_json_contract() {
    let home = tempfile::tempdir().unwrap();
    let assert = tomato(home.path())
        .args(["parse", "20m10s", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let value: Value = serde_json::from_str(&stdout).expect("Output should be valid JSON");
    assert_eq!(value["seconds"], 1210);
    assert_eq!(value["range"]["upper"], "min");
    assert_eq!(value["range"]["lower"], "sec");
}

#[test]
fn test_parse_rejects_bad_literal() {
    let home = tempfile::tempdir().unwrap();
    tomato(home.path())
        .args(["parse", "99h"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("leading digit '9'"));
}

#[test]
fn test_format_explicit_range() {
    let home = tempfile::tempdir().unwrap();
    tomato(home.path())
        .args(["format", "8000", "--upper", "hour", "--lower", "sec"])
        .assert()
        .success()
        .stdout("2:13:20\n");
}

#[test]
fn test_format_uses_config_default_range() {
    let home = tempfile::tempdir().unwrap();
    tomato(home.path())
        .args(["format", "153"])
        .assert()
        .success()
        .stdout("2:33\n");

    fs::write(
        home.path().join("config.toml"),
        "[display]\nupper = \"hour\"\nlower = \"min\"\n",
    )
    .unwrap();
    tomato(home.path())
        .args(["format", "7260"])
        .assert()
        .success()
        .stdout("2:1\n");
}

#[test]
fn test_format_inverted_range_fails_with_diagnostic() {
    let home = tempfile::tempdir().unwrap();
    tomato(home.path())
        .args(["format", "60", "--upper", "sec", "--lower", "min"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported time format sec, min"));
}

#[test]
fn test_convert_round_trip() {
    let home = tempfile::tempdir().unwrap();
    tomato(home.path())
        .args(["convert", "1h05m"])
        .assert()
        .success()
        .stdout("1:5\n");
}

#[test]
fn test_config_init_and_get() {
    let home = tempfile::tempdir().unwrap();
    tomato(home.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(home.path().join("config.toml").exists());

    tomato(home.path())
        .args(["config", "get", "display.upper"])
        .assert()
        .success()
        .stdout("min\n");

    tomato(home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_invalid_config_is_reported() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join("config.toml"), "[log]\nlevel = \"loud\"\n").unwrap();

    tomato(home.path())
        .args(["parse", "5m"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level"));

    tomato(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
    tomato(home.path()).args(["parse", "5m"]).assert().success();
}
