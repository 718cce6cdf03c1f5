//! `extern "C"` entry points.
//!
//! Every function validates its raw arguments through `HostBuffer` and the
//! safe layer in `host`, then reports a status code. No function panics on
//! bad input.

use std::ptr;

use bf_01_md5_digest::DIGEST_LENGTH;
use bf_02_membership_filter::BloomFilter;
use tracing::warn;

use crate::buffer::HostBuffer;
use crate::error::{HostError, BF_OK};
use crate::host;

/// Create a filter from a copy of `bitmap`.
///
/// Returns null on any invalid argument or allocation failure.
///
/// # Safety
///
/// `bitmap` must be null or valid for reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn bf_new_bloom_filter(
    bitmap: *const u8,
    len: i32,
    padding: i32,
    hash_count: i32,
) -> *mut BloomFilter {
    let created = HostBuffer::from_raw(bitmap, len, "bitmap")
        .and_then(|bitmap| host::new_filter(bitmap.as_slice(), padding, hash_count));

    match created {
        Ok(filter) => Box::into_raw(Box::new(filter)),
        Err(e) => {
            warn!(error = %e, status = e.status(), "bf_new_bloom_filter failed");
            ptr::null_mut()
        }
    }
}

/// Release a filter. Null is ignored.
///
/// # Safety
///
/// `filter` must be null or a pointer returned by `bf_new_bloom_filter` that
/// has not been released yet.
#[no_mangle]
pub unsafe extern "C" fn bf_delete_bloom_filter(filter: *mut BloomFilter) {
    if !filter.is_null() {
        drop(Box::from_raw(filter));
    }
}

/// Re-initialize a filter in place.
///
/// Returns `BF_OK`, or a negative status with the filter unchanged.
///
/// # Safety
///
/// `filter` must be null or a live handle with no concurrent users; `bitmap`
/// must be null or valid for reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn bf_init_bloom_filter(
    filter: *mut BloomFilter,
    bitmap: *const u8,
    len: i32,
    padding: i32,
    hash_count: i32,
) -> i32 {
    let result = filter
        .as_mut()
        .ok_or(HostError::NullHandle)
        .and_then(|filter| {
            let bitmap = HostBuffer::from_raw(bitmap, len, "bitmap")?;
            host::init_filter(filter, bitmap.as_slice(), padding, hash_count)
        });

    status_of(result, "bf_init_bloom_filter")
}

/// Query a filter.
///
/// Returns `1` if the value might be contained, `0` if not, or a negative
/// status for a null handle or an invalid value buffer.
///
/// # Safety
///
/// `filter` must be null or a live handle; `value` must be null or valid for
/// reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn bf_might_contain(
    filter: *const BloomFilter,
    value: *const u8,
    len: i32,
) -> i32 {
    let result = filter.as_ref().ok_or(HostError::NullHandle).and_then(|filter| {
        let value = HostBuffer::from_raw(value, len, "value")?;
        Ok(host::might_contain(filter, value.as_slice()))
    });

    match result {
        Ok(found) => i32::from(found),
        Err(e) => {
            warn!(error = %e, status = e.status(), "bf_might_contain failed");
            e.status()
        }
    }
}

/// Write the 16-byte MD5 digest of `data` to `dest`.
///
/// # Safety
///
/// `data` must be null or valid for reads of `len` bytes; `dest` must be
/// valid for writes of 16 bytes and must not overlap `data`.
#[no_mangle]
pub unsafe extern "C" fn bf_calculate_md5_digest(data: *const u8, len: i32, dest: *mut u8) -> i32 {
    if dest.is_null() {
        let e = HostError::InvalidArgument("null digest destination".to_string());
        warn!(error = %e, "bf_calculate_md5_digest failed");
        return e.status();
    }

    let result = HostBuffer::from_raw(data, len, "data").map(|data| {
        let digest = host::digest(data.as_slice());
        ptr::copy_nonoverlapping(digest.as_ptr(), dest, DIGEST_LENGTH);
    });

    status_of(result, "bf_calculate_md5_digest")
}

fn status_of(result: Result<(), HostError>, call: &'static str) -> i32 {
    match result {
        Ok(()) => BF_OK,
        Err(e) => {
            warn!(error = %e, status = e.status(), call, "host call failed");
            e.status()
        }
    }
}
