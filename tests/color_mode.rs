use assert_cmd::Command;
use predicates::prelude::*;

#[test]
#[allow(deprecated)]
fn test_color_flag_values() {
    for value in ["always", "auto", "never", "ALWAYS", "Never"] {
        Command::cargo_bin("git-start")
            .unwrap()
            .args([format!("--color={value}").as_str(), "completion", "bash"])
            .assert()
            .success();
    }
}

#[test]
#[allow(deprecated)]
fn test_color_flag_invalid() {
    // Invalid color mode should be rejected by clap
    Command::cargo_bin("git-start")
        .unwrap()
        .args(["--color=invalid", "completion", "bash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'invalid'"));
}

#[test]
#[allow(deprecated)]
fn test_color_never_has_no_escape_codes() {
    let temp = assert_fs::TempDir::new().unwrap();

    Command::cargo_bin("git-start")
        .unwrap()
        .args(["--color=never", "init"])
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("✓ Created config"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
#[allow(deprecated)]
fn test_color_always_uses_escape_codes() {
    let temp = assert_fs::TempDir::new().unwrap();

    Command::cargo_bin("git-start")
        .unwrap()
        .args(["--color=always", "init"])
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("\x1b["));
}

#[test]
#[allow(deprecated)]
fn test_no_color_env() {
    let temp = assert_fs::TempDir::new().unwrap();

    Command::cargo_bin("git-start")
        .unwrap()
        .arg("init")
        .env("XDG_CONFIG_HOME", temp.path())
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stderr(predicate::str::contains("\x1b[").not());
}
