//! Logger metrics
//!
//! Counters for records dispatched through a logger and for handler
//! failures. Loggers derived with `with`/`with_group` share their parent's
//! counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use vlog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_handled();
/// metrics.record_failed();
///
/// assert_eq!(metrics.total_handled(), 1);
/// assert_eq!(metrics.failed_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records the handler accepted without error
    total_handled: AtomicU64,

    /// Records whose handler returned an error
    failed_count: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            total_handled: AtomicU64::new(0),
            failed_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_handled(&self) -> u64 {
        self.total_handled.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed_count.load(Ordering::Relaxed)
    }

    /// Returns the previous value
    #[inline]
    pub fn record_handled(&self) -> u64 {
        self.total_handled.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the previous value
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_count() as f64;
        let total = self.total_handled() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.total_handled.store(0, Ordering::Relaxed);
        self.failed_count.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            total_handled: AtomicU64::new(self.total_handled()),
            failed_count: AtomicU64::new(self.failed_count()),
        }
    }
}
