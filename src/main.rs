//! baudcat entry point: flag parsing, wiring, and cleanup.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use baudcat::emitter::{CancelToken, Outcome, PacedEmitter, SleepTimer};
use baudcat::rate::{RateConfig, TickPolicy};
use baudcat::sink::StdoutSink;
use baudcat::source::Input;
use baudcat::stats::{ruler_width, RunStats};
use baudcat::terminal::CursorGuard;
use baudcat::{Cli, Config};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("baudcat: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout stays reserved for the paced output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "baudcat", &mut io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let defaults = Config::load_or_default();

    // Flags beat the config file, the config file beats the built-ins.
    let rate = RateConfig::new(
        cli.baud.unwrap_or(defaults.baud),
        cli.fps.unwrap_or(defaults.fps),
        cli.blocksize.unwrap_or(defaults.blocksize),
    );
    let policy = TickPolicy::for_config(&rate);
    tracing::debug!(?policy, "derived tick policy");

    let input = cli.input.as_deref().context("no input given")?;
    let mut source = Input::from_arg(input).open(rate.block_size)?;

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || cancel.cancel())
            .context("could not install the interrupt handler")?;
    }

    let mut guard = if cli.no_cursor || defaults.hide_cursor {
        CursorGuard::hide()
    } else {
        CursorGuard::noop()
    };

    let mut emitter = PacedEmitter::new(policy, SleepTimer, cancel);
    let mut sink = StdoutSink;
    let report = emitter.run(source.as_mut(), &mut sink)?;

    guard.restore();

    match report.outcome {
        Outcome::Interrupted => {
            // Leave the shell prompt on a fresh line; an interrupted run
            // shows no stats, like the classic behavior.
            println!();
            Ok(ExitCode::from(130))
        }
        Outcome::Completed => {
            if cli.stats || defaults.stats {
                let stats = RunStats::from_report(&report, &rate);
                println!("\n{}", stats.render(ruler_width()));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
