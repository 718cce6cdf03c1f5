//! Hash functions for the Bloom filter
//!
//! One MD5 digest per query is split into two 64-bit seeds:
//!
//! - `h1` = digest bytes `0..8` read as a little-endian `u64`
//! - `h2` = digest bytes `8..16` read as a little-endian `u64`
//!
//! Probe `i` lands on `(h1 + i * h2) mod size`, with the addition and
//! multiplication wrapping at 2^64. Bitmaps built by the backend use exactly
//! this scheme; reading the seeds any other way (big-endian words, single
//! digest bytes) yields positions that do not match those bitmaps.

use bf_01_md5_digest::{md5_digest, Md5Digest};

/// The two double-hashing seeds derived from a value's digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashSeeds {
    pub h1: u64,
    pub h2: u64,
}

impl HashSeeds {
    /// Digest `value` and split the result into seeds.
    pub fn from_value(value: &[u8]) -> Self {
        Self::from_digest(&md5_digest(value))
    }

    /// Split an existing digest into seeds.
    pub fn from_digest(digest: &Md5Digest) -> Self {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&digest[..8]);
        hi.copy_from_slice(&digest[8..]);
        Self {
            h1: u64::from_le_bytes(lo),
            h2: u64::from_le_bytes(hi),
        }
    }

    /// Bit index of probe `i` in a filter of `size` bits.
    ///
    /// `size` must be non-zero.
    pub fn bit_index(&self, i: u64, size: u64) -> u64 {
        self.h1.wrapping_add(i.wrapping_mul(self.h2)) % size
    }

    /// Lazily yields the `hash_count` probe positions for a filter of `size` bits.
    pub fn positions(self, hash_count: u32, size: u64) -> impl Iterator<Item = u64> {
        (0..u64::from(hash_count)).map(move |i| self.bit_index(i, size))
    }
}

/// Compute all probe positions for `value`.
///
/// Returns an empty vector when `size` is zero.
pub fn compute_hash_positions(value: &[u8], hash_count: u32, size: u64) -> Vec<u64> {
    if size == 0 {
        return Vec::new();
    }
    HashSeeds::from_value(value).positions(hash_count, size).collect()
}
