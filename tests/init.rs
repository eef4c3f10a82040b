#![allow(deprecated)]

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn init_cmd(xdg: &assert_fs::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("git-start").unwrap();
    cmd.arg("init")
        .env("XDG_CONFIG_HOME", xdg.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_init_creates_global_config() {
    let temp = assert_fs::TempDir::new().unwrap();

    init_cmd(&temp)
        .assert()
        .success()
        .stderr(predicate::str::contains("Created config"));

    temp.child("git-start/config.toml")
        .assert(predicate::str::contains("git-start configuration"));

    temp.close().unwrap();
}

#[test]
fn test_init_skip_existing_without_force() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("git-start/config.toml");
    config.write_str("# existing content").unwrap();

    init_cmd(&temp)
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    config.assert("# existing content");

    temp.close().unwrap();
}

#[test]
fn test_init_force_overwrite() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("git-start/config.toml");
    config.write_str("# existing content").unwrap();

    init_cmd(&temp)
        .arg("--force")
        .assert()
        .success()
        .stderr(predicate::str::contains("Created config"));

    config.assert(predicate::str::contains("[storage]"));

    temp.close().unwrap();
}

#[test]
fn test_init_does_not_need_repository() {
    let temp = assert_fs::TempDir::new().unwrap();

    init_cmd(&temp).current_dir(temp.path()).assert().success();

    temp.close().unwrap();
}
