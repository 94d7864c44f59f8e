//! Workspace helper tasks, run as `cargo xtask <command>`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "baudcat workspace tasks")]
enum Task {
    /// Generate the man page into target/man/.
    Man,
}

fn main() -> Result<()> {
    match Task::parse() {
        Task::Man => generate_man_page(),
    }
}

fn generate_man_page() -> Result<()> {
    let cmd = baudcat::Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut rendered = Vec::new();
    man.render(&mut rendered)
        .context("could not render the man page")?;

    let out_dir = PathBuf::from("target/man");
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("could not create {}", out_dir.display()))?;
    let out_path = out_dir.join("baudcat.1");
    fs::write(&out_path, rendered)
        .with_context(|| format!("could not write {}", out_path.display()))?;

    println!("wrote {}", out_path.display());
    Ok(())
}
