//! Core Bloom Filter implementation
//!
//! A query-only filter over a bitmap built elsewhere with the same hash
//! scheme (see `hash_functions`).
//!
//! INVARIANTS:
//! - `size == bitmap_len * 8 - padding`, and `padding <= bitmap_len * 8`
//! - `size == 0` or an empty value ⇒ `might_contain` is `false`
//! - The bitmap is owned; it never aliases the caller's buffer

use bitvec::prelude::*;
use tracing::debug;

use super::config::FilterConfig;
use super::encoded::EncodedBloomFilter;
use super::hash_functions::{compute_hash_positions, HashSeeds};
use crate::error::FilterError;

/// Lifecycle state of a filter
///
/// Derived from the usable bit count, not from bitmap ownership. A fully
/// padded bitmap reports `Uninitialized` while still holding its bytes, and
/// re-initializing with such a bitmap moves an `Initialized` filter back to
/// `Uninitialized`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterState {
    /// No usable bits; every query is `false`
    Uninitialized,
    /// Owns a bitmap with at least one usable bit
    Initialized,
}

/// Bloom filter for probabilistic membership testing
///
/// False positives are possible, false negatives are not (for values the
/// backend encoded into the bitmap).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BloomFilter {
    /// Owned copy of the bitmap, bit 0 = LSB of byte 0
    bits: BitVec<u8, Lsb0>,
    /// Usable bits (bitmap bits minus padding)
    size: u64,
    /// Probes per query
    hash_count: u32,
}

impl BloomFilter {
    /// Create an uninitialized filter (no bitmap, size 0)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a filter from a bitmap copy with the default limits
    ///
    /// # Arguments
    /// * `bitmap` - Bitmap bytes; copied, the caller keeps ownership
    /// * `padding` - Trailing bits of the last byte that are not addressable
    /// * `hash_count` - Probes per query
    pub fn new(bitmap: &[u8], padding: u32, hash_count: u32) -> Result<Self, FilterError> {
        Self::new_with_config(bitmap, padding, hash_count, &FilterConfig::default())
    }

    /// Create a filter, enforcing the given limits
    pub fn new_with_config(
        bitmap: &[u8],
        padding: u32,
        hash_count: u32,
        config: &FilterConfig,
    ) -> Result<Self, FilterError> {
        config.check(bitmap.len(), hash_count)?;

        let capacity = (bitmap.len() as u64)
            .checked_mul(8)
            .ok_or(FilterError::BitmapTooLarge {
                len: bitmap.len(),
                max: config.max_bitmap_bytes,
            })?;
        let padding = u64::from(padding);
        if padding > capacity {
            return Err(FilterError::PaddingExceedsCapacity { padding, capacity });
        }

        let bits = copy_bitmap(bitmap)?;
        let size = capacity - padding;

        debug!(
            bitmap_bytes = bitmap.len(),
            size_bits = size,
            hash_count,
            "Bloom filter initialized"
        );

        Ok(Self {
            bits,
            size,
            hash_count,
        })
    }

    /// Create a filter from host-width signed integers
    ///
    /// Negative padding or hash count is rejected before anything is copied.
    pub fn from_raw_parts(bitmap: &[u8], padding: i32, hash_count: i32) -> Result<Self, FilterError> {
        Self::from_raw_parts_with_config(bitmap, padding, hash_count, &FilterConfig::default())
    }

    /// `from_raw_parts` with explicit limits
    pub fn from_raw_parts_with_config(
        bitmap: &[u8],
        padding: i32,
        hash_count: i32,
        config: &FilterConfig,
    ) -> Result<Self, FilterError> {
        let padding = non_negative("padding", padding)?;
        let hash_count = non_negative("hash count", hash_count)?;
        Self::new_with_config(bitmap, padding, hash_count, config)
    }

    /// Create a filter from the backend's JSON/base64 representation
    pub fn from_encoded(encoded: &EncodedBloomFilter) -> Result<Self, FilterError> {
        Self::from_encoded_with_config(encoded, &FilterConfig::default())
    }

    /// `from_encoded` with explicit limits
    pub fn from_encoded_with_config(
        encoded: &EncodedBloomFilter,
        config: &FilterConfig,
    ) -> Result<Self, FilterError> {
        let bitmap = encoded.decode_bitmap()?;
        Self::from_raw_parts_with_config(&bitmap, encoded.bits.padding, encoded.hash_count, config)
    }

    /// Replace the bitmap and parameters
    ///
    /// All validation and the copy happen first; on error `self` is
    /// unchanged. On success the previous bitmap is dropped.
    pub fn initialize(&mut self, bitmap: &[u8], padding: u32, hash_count: u32) -> Result<(), FilterError> {
        self.initialize_with_config(bitmap, padding, hash_count, &FilterConfig::default())
    }

    /// `initialize` with explicit limits
    pub fn initialize_with_config(
        &mut self,
        bitmap: &[u8],
        padding: u32,
        hash_count: u32,
        config: &FilterConfig,
    ) -> Result<(), FilterError> {
        *self = Self::new_with_config(bitmap, padding, hash_count, config)?;
        Ok(())
    }

    /// Test if a value might be in the filter
    ///
    /// Returns:
    /// - `true` if every probed bit is set (could be a false positive)
    /// - `false` if any probed bit is clear, the filter is empty, or `value` is empty
    pub fn might_contain(&self, value: &[u8]) -> bool {
        if self.size == 0 || value.is_empty() {
            return false;
        }

        HashSeeds::from_value(value)
            .positions(self.hash_count, self.size)
            .all(|pos| self.is_bit_set(pos))
    }

    /// Probe positions `value` maps to (diagnostics)
    pub fn hash_positions(&self, value: &[u8]) -> Vec<u64> {
        compute_hash_positions(value, self.hash_count, self.size)
    }

    /// Get the filter size in usable bits
    pub fn size_bits(&self) -> u64 {
        self.size
    }

    /// Get the number of probes per query
    pub fn hash_count(&self) -> u32 {
        self.hash_count
    }

    /// Get the owned bitmap length in bytes
    pub fn bitmap_len(&self) -> usize {
        self.bits.as_raw_slice().len()
    }

    /// Get the owned bitmap bytes
    pub fn bitmap(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }

    /// Number of set bits within the usable range
    pub fn bits_set(&self) -> usize {
        self.bits[..self.size as usize].count_ones()
    }

    /// Current lifecycle state
    pub fn state(&self) -> FilterState {
        if self.size == 0 {
            FilterState::Uninitialized
        } else {
            FilterState::Initialized
        }
    }

    /// Whether the filter has any usable bits
    pub fn is_initialized(&self) -> bool {
        self.state() == FilterState::Initialized
    }

    fn is_bit_set(&self, pos: u64) -> bool {
        // pos < size <= bits.len()
        self.bits[pos as usize]
    }
}

/// Copy `bitmap` into a freshly reserved buffer
fn copy_bitmap(bitmap: &[u8]) -> Result<BitVec<u8, Lsb0>, FilterError> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(bitmap.len())
        .map_err(|_| FilterError::AllocationFailed {
            bytes: bitmap.len(),
        })?;
    bytes.extend_from_slice(bitmap);

    BitVec::try_from_vec(bytes).map_err(|rejected| FilterError::BitmapTooLarge {
        len: rejected.len(),
        max: BitSlice::<u8, Lsb0>::MAX_ELTS,
    })
}

/// Convert a host-width integer, rejecting negatives
pub fn non_negative(what: &'static str, value: i32) -> Result<u32, FilterError> {
    u32::try_from(value).map_err(|_| FilterError::NegativeValue {
        what,
        value: i64::from(value),
    })
}
