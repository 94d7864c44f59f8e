//! Command-line interface definition.

use clap::Parser;
use clap_complete::Shell;

/// A buffered cat command with BAUD rate simulation.
#[derive(Debug, Parser)]
#[command(
    name = "baudcat",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BAUDCAT_BUILD_DATE"), ")"),
    about = "A buffered cat command with BAUD rate simulation.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Text file to output, or `-` for standard input.
    #[arg(value_name = "FILE", required_unless_present = "completions")]
    pub input: Option<String>,

    /// Simulate baud rate [1, 512K].
    #[arg(short = 'b', long, value_name = "RATE")]
    pub baud: Option<u32>,

    /// Frames per second [1, 240].
    #[arg(long, value_name = "FPS")]
    pub fps: Option<u32>,

    /// Read blocksize, in KiB.
    #[arg(long, value_name = "SIZE")]
    pub blocksize: Option<u64>,

    /// Hide cursor while outputting. Restore at end.
    #[arg(short = 'C', long = "no-cursor")]
    pub no_cursor: bool,

    /// Show stats at the end.
    #[arg(long)]
    pub stats: bool,

    /// Generate shell completions and exit.
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
