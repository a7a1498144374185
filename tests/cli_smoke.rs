#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Every command runs with an isolated `XDG_CONFIG_HOME` so a developer's
//! real config file cannot leak into the assertions. None of these tests
//! touch the network: they stop at argument or input validation.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn dlt(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dlt").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env_remove("DEEPL_AUTH_KEY");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    dlt(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("translate"))
        .stdout(predicate::str::contains("languages"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    dlt(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_translate_help_lists_flags() {
    let home = TempDir::new().unwrap();
    dlt(&home)
        .args(["translate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--text"))
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--source-lang"))
        .stdout(predicate::str::contains("--target-lang"))
        .stdout(predicate::str::contains("--proxy-api"));
}

#[test]
fn test_translate_without_input_fails() {
    let home = TempDir::new().unwrap();
    dlt(&home).arg("translate").assert().failure();
}

#[test]
fn test_translate_with_text_and_file_fails() {
    let home = TempDir::new().unwrap();
    dlt(&home)
        .args(["translate", "-c", "hi", "-f", "doc.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_translate_missing_file_fails() {
    let home = TempDir::new().unwrap();
    dlt(&home)
        .args(["translate", "-f", "/nonexistent/doc.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to access file"));
}

#[test]
fn test_translate_invalid_language_code_fails() {
    let home = TempDir::new().unwrap();
    dlt(&home)
        .args(["translate", "-c", "hi", "-s", "XX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language code"));
}

#[test]
fn test_translate_invalid_proxy_url_fails() {
    let home = TempDir::new().unwrap();
    dlt(&home)
        .args(["translate", "-c", "hi", "-p", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid proxy API url"));
}

#[test]
fn test_languages_lists_codes() {
    let home = TempDir::new().unwrap();
    dlt(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("EN"))
        .stdout(predicate::str::contains("ZH"))
        .stdout(predicate::str::contains("JA"));
}

#[test]
fn test_quiet_flag_is_accepted() {
    let home = TempDir::new().unwrap();
    dlt(&home).args(["-q", "languages"]).assert().success();
}

#[test]
fn test_config_file_is_honored() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("dlt");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[dlt]\nsource_lang = \"XX\"\n",
    )
    .unwrap();

    // The bad code from the config file must reach language validation,
    // proving the file was loaded and resolved.
    dlt(&home)
        .args(["translate", "-c", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language code: 'XX'"));
}

#[test]
fn test_cli_language_overrides_config_file() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("dlt");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[dlt]\ntarget_lang = \"XX\"\n",
    )
    .unwrap();

    // CLI target wins over the config file, so validation now trips on the
    // source code instead.
    dlt(&home)
        .args(["translate", "-c", "hi", "-t", "ZH", "-s", "YY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language code: 'YY'"));
}

#[test]
fn test_malformed_config_file_fails() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("dlt");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "not [ valid toml").unwrap();

    dlt(&home)
        .args(["translate", "-c", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
}
