//! Metrics hooks for membership filter operations
//!
//! Counters for initializations, lookups and held bitmap memory.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use bf_02_membership_filter::{FilterConfig, Metrics, SharedBloomFilter};
//!
//! let metrics = Arc::new(Metrics::new());
//! let filter = SharedBloomFilter::with_metrics(FilterConfig::default(), metrics.clone());
//! filter.initialize(&[0x46, 0xcc, 0x19], 1, 16).unwrap();
//! filter.might_contain(b"projects/project-1/databases/database-1/documents/coll/doc0");
//!
//! assert_eq!(metrics.snapshot().lookups_performed, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Metrics collector for filter operations
///
/// Thread-safe counters and gauges.
#[derive(Default)]
pub struct Metrics {
    /// Successful initializations (including re-initializations)
    pub filters_initialized: AtomicU64,
    /// Initializations rejected by validation
    pub initializations_rejected: AtomicU64,
    /// Total lookups performed
    pub lookups_performed: AtomicU64,
    /// Lookups that returned `true`
    pub lookups_positive: AtomicU64,
    /// Bitmap bytes currently held
    pub bytes_held: AtomicU64,
    /// Cumulative lookup time in nanoseconds
    pub lookup_time_ns: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful (re-)initialization
    ///
    /// `bytes_held` moves from `previous_bytes` to `new_bytes` in a single
    /// atomic step. Callers must serialize replacements so that
    /// `previous_bytes` is what the gauge last recorded.
    ///
    /// # Arguments
    /// * `previous_bytes` - Bytes owned by the filter being replaced
    /// * `new_bytes` - Bytes now owned by the filter
    pub fn record_filter_replaced(
        &self,
        previous_bytes: usize,
        new_bytes: usize,
        _size_bits: u64,
        _hash_count: u32,
    ) {
        self.filters_initialized.fetch_add(1, Ordering::Relaxed);
        if new_bytes >= previous_bytes {
            self.bytes_held
                .fetch_add((new_bytes - previous_bytes) as u64, Ordering::Relaxed);
        } else {
            self.bytes_held
                .fetch_sub((previous_bytes - new_bytes) as u64, Ordering::Relaxed);
        }
    }

    /// Record a rejected initialization
    pub fn record_initialization_rejected(&self) {
        self.initializations_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record lookup operation
    ///
    /// # Arguments
    /// * `duration` - Time taken for lookup
    /// * `found` - Whether the value might be contained
    pub fn record_lookup(&self, duration: Duration, found: bool) {
        self.lookups_performed.fetch_add(1, Ordering::Relaxed);
        self.lookup_time_ns.fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if found {
            self.lookups_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            filters_initialized: self.filters_initialized.load(Ordering::Relaxed),
            initializations_rejected: self.initializations_rejected.load(Ordering::Relaxed),
            lookups_performed: self.lookups_performed.load(Ordering::Relaxed),
            lookups_positive: self.lookups_positive.load(Ordering::Relaxed),
            bytes_held: self.bytes_held.load(Ordering::Relaxed),
            avg_lookup_ns: self.avg_lookup_time_ns(),
        }
    }

    /// Calculate average lookup time in nanoseconds
    pub fn avg_lookup_time_ns(&self) -> u64 {
        let total = self.lookup_time_ns.load(Ordering::Relaxed);
        let count = self.lookups_performed.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Ratio of positive lookups to total lookups
    ///
    /// Includes both true and false positives.
    pub fn observed_positive_rate(&self) -> f64 {
        let total = self.lookups_performed.load(Ordering::Relaxed);
        let positive = self.lookups_positive.load(Ordering::Relaxed);
        if total > 0 {
            positive as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.filters_initialized.store(0, Ordering::Relaxed);
        self.initializations_rejected.store(0, Ordering::Relaxed);
        self.lookups_performed.store(0, Ordering::Relaxed);
        self.lookups_positive.store(0, Ordering::Relaxed);
        self.bytes_held.store(0, Ordering::Relaxed);
        self.lookup_time_ns.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub filters_initialized: u64,
    pub initializations_rejected: u64,
    pub lookups_performed: u64,
    pub lookups_positive: u64,
    pub bytes_held: u64,
    pub avg_lookup_ns: u64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    /// Record a successful (re-)initialization swapping `previous_bytes` for `new_bytes`
    fn record_filter_replaced(
        &self,
        previous_bytes: usize,
        new_bytes: usize,
        size_bits: u64,
        hash_count: u32,
    );

    /// Record a rejected initialization
    fn record_initialization_rejected(&self);

    /// Record lookup operation
    fn record_lookup(&self, duration: Duration, found: bool);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_filter_replaced(&self, _: usize, _: usize, _: u64, _: u32) {}
    fn record_initialization_rejected(&self) {}
    fn record_lookup(&self, _: Duration, _: bool) {}
}

impl MetricsRecorder for Metrics {
    fn record_filter_replaced(
        &self,
        previous_bytes: usize,
        new_bytes: usize,
        size_bits: u64,
        hash_count: u32,
    ) {
        Metrics::record_filter_replaced(self, previous_bytes, new_bytes, size_bits, hash_count);
    }

    fn record_initialization_rejected(&self) {
        Metrics::record_initialization_rejected(self);
    }

    fn record_lookup(&self, duration: Duration, found: bool) {
        Metrics::record_lookup(self, duration, found);
    }
}
