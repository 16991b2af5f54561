use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("rce").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rce"));
}

#[test]
fn cli_rejects_blank_demonym() {
    let mut cmd = Command::cargo_bin("rce").unwrap();
    cmd.args(["demonym", "--demonym", "   "]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a demonym."));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn region_listing_online() {
    let mut cmd = Command::cargo_bin("rce").unwrap();
    cmd.args(["region", "--region", "europe", "--locale", "de"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("countries in europe"));
}
