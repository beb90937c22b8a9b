//! Lightweight stage timing.
//!
//! Timers are cheap no-ops unless timing is switched on, either
//! programmatically or through the `AG_TIMING` environment variable.
//! Elapsed times are reported as `tracing` events so they land wherever
//! the host installed its subscriber.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable stage timing globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Disable stage timing globally.
pub fn disable_timing() {
    ENABLED.store(false, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var_os("AG_TIMING").is_some()
}

/// A simple timer that measures one pipeline stage.
pub struct Timer {
    label: &'static str,
    start: Instant,
    enabled: bool,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
            enabled: is_enabled(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Stop the timer and return elapsed time in seconds.
    /// If timing is disabled, returns None.
    pub fn stop(self) -> Option<f64> {
        if self.enabled {
            Some(self.start.elapsed().as_secs_f64())
        } else {
            None
        }
    }

    /// Stop the timer and emit a debug event if enabled.
    pub fn stop_and_log(self) {
        let stage = self.label;
        if let Some(elapsed) = self.stop() {
            tracing::debug!(stage, elapsed_ms = elapsed * 1e3, "stage timing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_reports_only_when_enabled() {
        enable_timing();
        let timer = Timer::start("enabled");
        assert_eq!(timer.label(), "enabled");
        let elapsed = timer.stop();
        assert!(elapsed.is_some_and(|s| s >= 0.0));
        disable_timing();

        // Still enabled when AG_TIMING is exported in the test environment.
        let timer = Timer::start("disabled");
        assert_eq!(timer.stop().is_some(), is_enabled());
    }
}
