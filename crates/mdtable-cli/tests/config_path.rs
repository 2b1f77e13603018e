use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("mdtable")
        .env("MDTABLE_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("mdtable")
        .env("MDTABLE_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("format = \"html\""));
    assert!(contents.contains("max_width = 100"));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "# existing config").unwrap();

    cargo_bin_cmd!("mdtable")
        .env("MDTABLE_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_format_used_by_render() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[render]\nformat = \"markdown\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("mdtable")
        .env("MDTABLE_HOME", dir.path())
        .env_remove("MDTABLE_FORMAT")
        .args(["render", "tests/fixtures/scores.md"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("| Name | Score |"));
}

#[test]
fn test_invalid_config_reports_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[render\n").unwrap();

    cargo_bin_cmd!("mdtable")
        .env("MDTABLE_HOME", dir.path())
        .args(["render", "tests/fixtures/scores.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));
}

#[test]
fn test_config_path_works_with_invalid_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[render\n").unwrap();

    cargo_bin_cmd!("mdtable")
        .env("MDTABLE_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
