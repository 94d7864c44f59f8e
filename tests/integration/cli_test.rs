//! CLI surface tests: flags, help, and failure paths.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with the config lookup pinned to an empty directory, so a
/// config file on the host cannot change the defaults under test.
fn baudcat(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("baudcat").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn help_lists_the_classic_flags() {
    let config = TempDir::new().unwrap();
    baudcat(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--baud")
                .and(predicate::str::contains("--fps"))
                .and(predicate::str::contains("--no-cursor"))
                .and(predicate::str::contains("--stats"))
                .and(predicate::str::contains("--blocksize")),
        );
}

#[test]
fn version_is_reported() {
    let config = TempDir::new().unwrap();
    baudcat(&config)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("baudcat"));
}

#[test]
fn no_arguments_shows_usage() {
    let config = TempDir::new().unwrap();
    baudcat(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_file_fails_with_its_path() {
    let config = TempDir::new().unwrap();
    baudcat(&config)
        .arg("/no/such/file.txt")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("could not open file")
                .and(predicate::str::contains("/no/such/file.txt")),
        );
}

#[test]
fn completions_are_generated_without_input() {
    let config = TempDir::new().unwrap();
    baudcat(&config)
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("baudcat"));
}
