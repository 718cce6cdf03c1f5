//! Safe operations behind the C ABI.
//!
//! These take Rust slices and host-width integers, so they can be tested
//! and reused without raw pointers.
//!
//! Filter limits come from `BF_MAX_BITMAP_BYTES` and `BF_MAX_HASH_COUNT`,
//! read on every create/init call.

use bf_01_md5_digest::{md5_digest, Md5Digest};
use bf_02_membership_filter::domain::non_negative;
use bf_02_membership_filter::{BloomFilter, FilterConfig};
use tracing::trace;

use crate::error::HostError;

/// Create a filter from host parameters
pub fn new_filter(bitmap: &[u8], padding: i32, hash_count: i32) -> Result<BloomFilter, HostError> {
    let config = FilterConfig::from_env()?;
    Ok(BloomFilter::from_raw_parts_with_config(
        bitmap, padding, hash_count, &config,
    )?)
}

/// Re-initialize `filter`; on error it is left unchanged
pub fn init_filter(
    filter: &mut BloomFilter,
    bitmap: &[u8],
    padding: i32,
    hash_count: i32,
) -> Result<(), HostError> {
    let padding = non_negative("padding", padding)?;
    let hash_count = non_negative("hash count", hash_count)?;
    let config = FilterConfig::from_env()?;
    filter.initialize_with_config(bitmap, padding, hash_count, &config)?;
    Ok(())
}

/// Query `filter`
pub fn might_contain(filter: &BloomFilter, value: &[u8]) -> bool {
    let found = filter.might_contain(value);
    trace!(value_len = value.len(), found, "host lookup");
    found
}

/// Digest `data`
pub fn digest(data: &[u8]) -> Md5Digest {
    md5_digest(data)
}
