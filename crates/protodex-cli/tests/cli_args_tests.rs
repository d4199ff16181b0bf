//! Argument-surface tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn protodex() -> Command {
    Command::cargo_bin("protodex").expect("binary built")
}

#[test]
fn test_version_flag() {
    protodex()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("protodex"));
}

#[test]
fn test_no_subcommand_shows_usage() {
    protodex()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_subcommand_rejected() {
    protodex()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_verify_requires_both_roots() {
    protodex()
        .args(["verify", "only-server"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
