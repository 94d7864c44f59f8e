//! End-of-run transfer statistics.

use std::time::Duration;

use humansize::{format_size, BINARY};

use crate::emitter::EmissionReport;
use crate::rate::RateConfig;

/// Widest the summary ruler gets; narrower terminals shrink it.
const RULER_WIDTH: usize = 72;

/// Figures for the summary block printed after a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Bytes actually written to the sink.
    pub bytes: u64,
    /// Wall time the run took.
    pub elapsed: Duration,
    /// The configured baud setting, for comparison.
    pub baud_setting: u32,
}

impl RunStats {
    pub fn from_report(report: &EmissionReport, config: &RateConfig) -> Self {
        Self {
            bytes: report.bytes_emitted,
            elapsed: report.elapsed,
            baud_setting: config.baud,
        }
    }

    /// Effective transfer rate in bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.bytes as f64 / secs
        } else {
            0.0
        }
    }

    /// Render the summary block, `width` columns wide.
    pub fn render(&self, width: usize) -> String {
        let ruler = "=".repeat(width);
        format!(
            "{ruler}\n\
             Size: {} bytes ({})\n\
             Time: {:.1} seconds\n\
             BAUD: {:.1} B/s (setting: {} BAUD)\n\
             {ruler}\n",
            self.bytes,
            format_size(self.bytes, BINARY),
            self.elapsed.as_secs_f64(),
            self.bytes_per_second(),
            self.baud_setting,
        )
    }
}

/// Ruler width for the current terminal, capped at [`RULER_WIDTH`].
pub fn ruler_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| (w.0 as usize).min(RULER_WIDTH))
        .unwrap_or(RULER_WIDTH)
}
