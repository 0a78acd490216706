//! Metrics collection for bot runs.

use crate::pipeline::RunReport;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Metrics collector for reply cycles.
#[derive(Debug, Clone)]
pub struct BotMetrics {
    inner: Arc<BotMetricsInner>,
}

#[derive(Debug)]
struct BotMetricsInner {
    runs: AtomicU64,
    posts: AtomicU64,
    skips: AtomicU64,
    failures: AtomicU64,
    last_success: parking_lot::Mutex<Option<Instant>>,
}

impl Default for BotMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl BotMetrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BotMetricsInner {
                runs: AtomicU64::new(0),
                posts: AtomicU64::new(0),
                skips: AtomicU64::new(0),
                failures: AtomicU64::new(0),
                last_success: parking_lot::Mutex::new(None),
            }),
        }
    }

    /// Records the start of a cycle.
    pub fn record_run(&self) {
        self.inner.runs.fetch_add(1, Ordering::Relaxed);
    }

    /// Records the outcome of a completed cycle.
    pub fn record_report(&self, report: &RunReport) {
        *self.inner.last_success.lock() = Some(Instant::now());
        match report {
            RunReport::Posted { .. } => {
                self.inner.posts.fetch_add(1, Ordering::Relaxed);
            }
            RunReport::Skipped { .. } => {
                self.inner.skips.fetch_add(1, Ordering::Relaxed);
            }
            RunReport::DryRun { .. } => {}
        }
    }

    /// Records a failed cycle.
    pub fn record_failure(&self) {
        self.inner.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the cycle count.
    pub fn runs(&self) -> u64 {
        self.inner.runs.load(Ordering::Relaxed)
    }

    /// Gets the published-post count.
    pub fn posts(&self) -> u64 {
        self.inner.posts.load(Ordering::Relaxed)
    }

    /// Gets the skipped-cycle count.
    pub fn skips(&self) -> u64 {
        self.inner.skips.load(Ordering::Relaxed)
    }

    /// Gets the failed-cycle count.
    pub fn failures(&self) -> u64 {
        self.inner.failures.load(Ordering::Relaxed)
    }

    /// Gets time since the last completed cycle.
    pub fn time_since_success(&self) -> Option<std::time::Duration> {
        self.inner
            .last_success
            .lock()
            .map(|instant| instant.elapsed())
    }

    /// Gets the completed-cycle rate (0.0 - 1.0).
    pub fn success_rate(&self) -> f64 {
        let runs = self.runs();
        if runs == 0 {
            return 1.0;
        }
        let successes = runs.saturating_sub(self.failures());
        successes as f64 / runs as f64
    }

    /// Creates a serializable snapshot of current metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            runs: self.runs(),
            posts: self.posts(),
            skips: self.skips(),
            failures: self.failures(),
            seconds_since_success: self.time_since_success().map(|d| d.as_secs()),
            success_rate: self.success_rate(),
        }
    }
}

/// Serializable snapshot of bot metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Number of cycles started
    pub runs: u64,
    /// Number of replies published
    pub posts: u64,
    /// Number of cycles that found no eligible post
    pub skips: u64,
    /// Number of failed cycles
    pub failures: u64,
    /// Seconds since the last completed cycle
    pub seconds_since_success: Option<u64>,
    /// Completed-cycle rate across all runs
    pub success_rate: f64,
}
