#![allow(deprecated)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_dynamic_completion_with_complete_env() {
    // When COMPLETE is set, the program handles completion and exits successfully
    Command::cargo_bin("git-start")
        .unwrap()
        .env("COMPLETE", "bash")
        .assert()
        .success();
}

#[test]
fn test_completion_instructions() {
    for shell in ["bash", "zsh", "fish"] {
        Command::cargo_bin("git-start")
            .unwrap()
            .args(["completion", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("COMPLETE={shell} git-start")));
    }
}

#[test]
fn test_completion_invalid_shell() {
    Command::cargo_bin("git-start")
        .unwrap()
        .args(["completion", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid shell"));
}

#[test]
fn test_complete_subcommands() {
    let temp = assert_fs::TempDir::new().unwrap();

    // Command line being completed: "git-start p<TAB>"
    let output = Command::new(env!("CARGO_BIN_EXE_git-start"))
        .env("COMPLETE", "bash")
        .env("_CLAP_COMPLETE_INDEX", "1")
        .env("_CLAP_IFS", "\n")
        .args(["--", "git-start", "p"])
        .current_dir(temp.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.lines().any(|line| line == "pr"),
        "Completion should include 'pr'. Output: {stdout}"
    );
}
