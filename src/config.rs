//! Persistent defaults loaded from the user config file.
//!
//! `baudcat` looks for `<config-dir>/baudcat/config.toml` (for example
//! `~/.config/baudcat/config.toml`). Every field is optional; a missing
//! file or field falls back to the built-in defaults, and command-line
//! flags override whatever the file says.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Defaults applied when neither a flag nor a config entry is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated baud rate.
    pub baud: u32,
    /// Frames per second.
    pub fps: u32,
    /// Read block size, in KiB.
    pub blocksize: u64,
    /// Hide the cursor during output.
    pub hide_cursor: bool,
    /// Print transfer statistics after a completed run.
    pub stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            baud: 2400,
            fps: 60,
            blocksize: 128,
            hide_cursor: false,
            stats: false,
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(dir.join("baudcat").join("config.toml"))
    }

    /// Load the config file, or the defaults when there is none.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("could not read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("could not parse {}", path.display()))
    }

    /// Load the config file, degrading to defaults with a warning when it
    /// is unreadable or malformed.
    pub fn load_or_default() -> Self {
        Config::load().unwrap_or_else(|err| {
            tracing::warn!("ignoring config file: {err:#}");
            Config::default()
        })
    }
}
