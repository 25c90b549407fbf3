//! Catalogue metrics
//!
//! Counters only, monotonic, reset on process start.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for the catalogue service
///
/// Relaxed atomics: counters are independent and only read for reporting.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    reads: AtomicU64,
    movies_created: AtomicU64,
    movies_updated: AtomicU64,
    movies_deleted: AtomicU64,
    requests_rejected: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a list or get
    pub fn increment_reads(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_created(&self) {
        self.movies_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.movies_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.movies_deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Count an operation that returned a catalogue error
    pub fn increment_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            reads: self.reads.load(Ordering::Relaxed),
            movies_created: self.movies_created.load(Ordering::Relaxed),
            movies_updated: self.movies_updated.load(Ordering::Relaxed),
            movies_deleted: self.movies_deleted.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
        }
    }

    /// Current values as a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or_default()
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub reads: u64,
    pub movies_created: u64,
    pub movies_updated: u64,
    pub movies_deleted: u64,
    pub requests_rejected: u64,
}
