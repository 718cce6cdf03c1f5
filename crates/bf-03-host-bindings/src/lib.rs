//! # BF-03 Host Bindings
//!
//! C ABI for hosts that embed the filter as a shared library.
//!
//! ## Exports
//!
//! | Function | Returns |
//! |----------|---------|
//! | `bf_new_bloom_filter(bitmap, len, padding, hash_count)` | handle, or null on error |
//! | `bf_delete_bloom_filter(filter)` | nothing; null is ignored |
//! | `bf_init_bloom_filter(filter, bitmap, len, padding, hash_count)` | status |
//! | `bf_might_contain(filter, value, len)` | `1`, `0`, or negative status |
//! | `bf_calculate_md5_digest(data, len, dest)` | status; writes 16 bytes to `dest` |
//!
//! ## Status Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | `0` | OK |
//! | `-1` | Invalid argument (negative length, null buffer, bad padding) |
//! | `-2` | Bitmap allocation failed |
//! | `-3` | Null filter handle |
//!
//! Bitmaps are copied on create and re-initialize; the host may free its
//! buffer as soon as the call returns.

pub mod abi;
pub mod buffer;
pub mod error;
pub mod host;

pub use abi::{
    bf_calculate_md5_digest, bf_delete_bloom_filter, bf_init_bloom_filter, bf_might_contain,
    bf_new_bloom_filter,
};
pub use buffer::HostBuffer;
pub use error::{HostError, BF_ERR_ALLOCATION, BF_ERR_INVALID_ARGUMENT, BF_ERR_NULL_HANDLE, BF_OK};
