//! Build script for baudcat - embeds the build date.
//!
//! Emits the `BAUDCAT_BUILD_DATE` environment variable, shown in the
//! long `--version` output.

use std::process::Command;

/// Get the current date in YYYY-MM-DD format
fn get_build_date() -> String {
    // Use the date command for cross-platform compatibility
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    // Fallback for systems where date command differs
    "unknown".to_string()
}

fn main() {
    println!("cargo:rustc-env=BAUDCAT_BUILD_DATE={}", get_build_date());
}
