//! Request counting with rate-limited logging

use log::info;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Log after this many requests
pub const DEFAULT_LOG_EVERY: u64 = 1000;

/// Log at least this often while requests keep arriving
pub const DEFAULT_LOG_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Counts served requests and periodically logs the total
#[derive(Debug)]
pub struct RequestMetrics {
    requests: AtomicU64,
    started: Instant,
    last_logged_secs: AtomicU64,
    log_every: u64,
    log_interval: Duration,
}

impl RequestMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::with_thresholds(DEFAULT_LOG_EVERY, DEFAULT_LOG_INTERVAL)
    }

    /// Metrics that log every `log_every` requests or after `log_interval`
    #[must_use]
    pub fn with_thresholds(log_every: u64, log_interval: Duration) -> Self {
        Self {
            requests: AtomicU64::new(0),
            started: Instant::now(),
            last_logged_secs: AtomicU64::new(0),
            log_every: log_every.max(1),
            log_interval,
        }
    }

    /// Count one request; returns whether this call logged the total
    pub fn record(&self) -> bool {
        let count = self.requests.fetch_add(1, Ordering::Relaxed) + 1;
        let elapsed = self.started.elapsed().as_secs();
        let last = self.last_logged_secs.load(Ordering::Relaxed);

        let due = count % self.log_every == 0
            || elapsed.saturating_sub(last) >= self.log_interval.as_secs();
        if due
            && self
                .last_logged_secs
                .compare_exchange(last, elapsed, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok()
        {
            info!(
                "Served {count} requests in {}s",
                self.started.elapsed().as_secs()
            );
            return true;
        }
        false
    }

    #[must_use]
    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }
}

impl Default for RequestMetrics {
    fn default() -> Self {
        Self::new()
    }
}
