//! Shared Bloom filter handle
//!
//! One writer, many readers. Queries take a read lock; `initialize` builds
//! the replacement filter before taking the write lock, swaps it in, and
//! drops the old bitmap after the lock is released.

use std::mem;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::domain::{non_negative, BloomFilter, FilterConfig, FilterState};
use crate::error::FilterError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::MembershipFilterApi;

/// Thread-safe Bloom filter
///
/// Cloning yields another handle to the same filter.
pub struct SharedBloomFilter<M: MetricsRecorder = NoOpMetrics> {
    inner: Arc<RwLock<BloomFilter>>,
    config: FilterConfig,
    metrics: Arc<M>,
}

impl SharedBloomFilter<NoOpMetrics> {
    /// Create an uninitialized shared filter
    pub fn new(config: FilterConfig) -> Self {
        Self::with_metrics(config, Arc::new(NoOpMetrics))
    }
}

impl Default for SharedBloomFilter<NoOpMetrics> {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl<M: MetricsRecorder> Clone for SharedBloomFilter<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            config: self.config.clone(),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

impl<M: MetricsRecorder> SharedBloomFilter<M> {
    /// Create an uninitialized shared filter reporting to `metrics`
    pub fn with_metrics(config: FilterConfig, metrics: Arc<M>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(BloomFilter::empty())),
            config,
            metrics,
        }
    }

    /// Replace the bitmap
    ///
    /// On error the previously installed filter keeps answering queries.
    pub fn initialize(&self, bitmap: &[u8], padding: u32, hash_count: u32) -> Result<(), FilterError> {
        let replacement =
            match BloomFilter::new_with_config(bitmap, padding, hash_count, &self.config) {
                Ok(filter) => filter,
                Err(e) => {
                    warn!(
                        bitmap_bytes = bitmap.len(),
                        padding,
                        hash_count,
                        error = %e,
                        "Rejected Bloom filter initialization"
                    );
                    self.metrics.record_initialization_rejected();
                    return Err(e);
                }
            };

        let size_bits = replacement.size_bits();
        let new_bytes = replacement.bitmap_len();

        // The gauge update stays under the write lock so replacements are
        // recorded in the order they were installed.
        let previous = {
            let mut guard = self.inner.write();
            let previous = mem::replace(&mut *guard, replacement);
            self.metrics.record_filter_replaced(
                previous.bitmap_len(),
                new_bytes,
                size_bits,
                hash_count,
            );
            previous
        };

        if previous.bitmap_len() > 0 {
            debug!(
                released_bytes = previous.bitmap_len(),
                "Released previous Bloom filter bitmap"
            );
        }

        Ok(())
    }

    /// Initialize from host-width signed integers
    pub fn initialize_raw(&self, bitmap: &[u8], padding: i32, hash_count: i32) -> Result<(), FilterError> {
        let converted = non_negative("padding", padding)
            .and_then(|padding| Ok((padding, non_negative("hash count", hash_count)?)));
        match converted {
            Ok((padding, hash_count)) => self.initialize(bitmap, padding, hash_count),
            Err(e) => {
                warn!(error = %e, "Rejected Bloom filter initialization");
                self.metrics.record_initialization_rejected();
                Err(e)
            }
        }
    }

    /// Test if a value might be in the filter
    pub fn might_contain(&self, value: &[u8]) -> bool {
        let start = Instant::now();
        let found = self.inner.read().might_contain(value);
        self.metrics.record_lookup(start.elapsed(), found);
        trace!(value_len = value.len(), found, "Bloom filter lookup");
        found
    }

    /// Usable bits of the current bitmap
    pub fn size_bits(&self) -> u64 {
        self.inner.read().size_bits()
    }

    /// Probes per query of the current bitmap
    pub fn hash_count(&self) -> u32 {
        self.inner.read().hash_count()
    }

    /// Current lifecycle state
    pub fn state(&self) -> FilterState {
        self.inner.read().state()
    }

    /// Copy of the current filter
    pub fn snapshot(&self) -> BloomFilter {
        self.inner.read().clone()
    }

    /// Limits applied on `initialize`
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }
}

impl<M: MetricsRecorder> MembershipFilterApi for SharedBloomFilter<M> {
    fn initialize(&self, bitmap: &[u8], padding: u32, hash_count: u32) -> Result<(), FilterError> {
        SharedBloomFilter::initialize(self, bitmap, padding, hash_count)
    }

    fn might_contain(&self, value: &[u8]) -> bool {
        SharedBloomFilter::might_contain(self, value)
    }

    fn size_bits(&self) -> u64 {
        SharedBloomFilter::size_bits(self)
    }

    fn hash_count(&self) -> u32 {
        SharedBloomFilter::hash_count(self)
    }
}
