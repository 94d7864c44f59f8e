//! End-of-run statistics output.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn baudcat(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("baudcat").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn stats_follow_the_output() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "12345").unwrap();

    baudcat(&config)
        .args(["-b", "524288", "--fps", "240", "--stats"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("12345")
                .and(predicate::str::contains("Size: 5 bytes"))
                .and(predicate::str::contains("Time:"))
                .and(predicate::str::contains("setting: 524288 BAUD"))
                .and(predicate::str::contains("====")),
        );
}

#[test]
fn stats_work_for_standard_input() {
    let config = TempDir::new().unwrap();
    baudcat(&config)
        .args(["-b", "524288", "--fps", "240", "--stats", "-"])
        .write_stdin("abc")
        .assert()
        .success()
        .stdout(predicate::str::contains("Size: 3 bytes"));
}

#[test]
fn no_stats_without_the_flag() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "12345").unwrap();

    baudcat(&config)
        .args(["-b", "524288", "--fps", "240"])
        .arg(&path)
        .assert()
        .success()
        .stdout("12345");
}

#[test]
fn config_file_can_turn_stats_on() {
    // A config file in the pinned XDG directory supplies the default
    let config = TempDir::new().unwrap();
    let baudcat_dir = config.path().join("baudcat");
    std::fs::create_dir_all(&baudcat_dir).unwrap();
    std::fs::write(baudcat_dir.join("config.toml"), "stats = true\n").unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "12345").unwrap();

    baudcat(&config)
        .args(["-b", "524288", "--fps", "240"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Size: 5 bytes"));
}
