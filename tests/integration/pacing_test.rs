//! End-to-end passthrough fidelity at a fast schedule.
//!
//! These runs use the top rate and frame settings so the whole input
//! fits in a handful of 4 ms ticks.

use assert_cmd::Command;
use tempfile::TempDir;

const FAST: [&str; 4] = ["-b", "524288", "--fps", "240"];

fn baudcat(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("baudcat").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn file_contents_pass_through_unchanged() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    let text = "The quick brown fox jumps over the lazy dog.\n".repeat(20);
    std::fs::write(&path, &text).unwrap();

    baudcat(&config)
        .args(FAST)
        .arg(&path)
        .assert()
        .success()
        .stdout(text);
}

#[test]
fn arbitrary_bytes_survive_the_schedule() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.bin");
    let data: Vec<u8> = (0u16..=255).map(|b| b as u8).cycle().take(1000).collect();
    std::fs::write(&path, &data).unwrap();

    baudcat(&config)
        .args(FAST)
        .arg(&path)
        .assert()
        .success()
        .stdout(data);
}

#[test]
fn dash_reads_standard_input() {
    let config = TempDir::new().unwrap();
    baudcat(&config)
        .args(FAST)
        .arg("-")
        .write_stdin("hello from stdin\n")
        .assert()
        .success()
        .stdout("hello from stdin\n");
}

#[test]
fn empty_file_emits_nothing() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "").unwrap();

    baudcat(&config)
        .args(FAST)
        .arg(&path)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn hidden_cursor_leaves_redirected_output_clean() {
    // Cursor escapes are only written to a real terminal, so piped
    // output must stay byte-identical to the input even with -C.
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "plain text\n").unwrap();

    baudcat(&config)
        .args(FAST)
        .arg("-C")
        .arg(&path)
        .assert()
        .success()
        .stdout("plain text\n");
}

#[test]
fn small_blocksize_still_passes_everything_through() {
    // 1 KiB blocks over a 5000-byte input forces several chunks
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    let text = "0123456789".repeat(500);
    std::fs::write(&path, &text).unwrap();

    baudcat(&config)
        .args(FAST)
        .args(["--blocksize", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout(text);
}
