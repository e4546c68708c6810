//! Timing for the expensive steps: loading the file and drawing a frame.
//!
//! A [`Timer`] reports when dropped, as a `tracing` debug event under the
//! `fv::perf` target. Enable it with `RUST_LOG=fv::perf=debug`, usually
//! together with `--log-file` so the output stays off the screen.

use std::time::{Duration, Instant};

/// Reports how long it lived when dropped.
#[derive(Debug)]
#[must_use = "the timer reports when it is dropped"]
pub struct Timer {
    label: &'static str,
    started: Instant,
}

impl Timer {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(target: "fv::perf", label = self.label, elapsed_ms, "timing");
    }
}
