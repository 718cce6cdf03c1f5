//! Error types and status codes for the host interface

use bf_02_membership_filter::FilterError;
use thiserror::Error;

/// Call succeeded
pub const BF_OK: i32 = 0;
/// A length, pointer, padding or hash count was rejected
pub const BF_ERR_INVALID_ARGUMENT: i32 = -1;
/// The bitmap copy could not be allocated
pub const BF_ERR_ALLOCATION: i32 = -2;
/// A filter handle was null
pub const BF_ERR_NULL_HANDLE: i32 = -3;

/// Errors raised while translating host arguments.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Null filter handle")]
    NullHandle,

    #[error(transparent)]
    Filter(#[from] FilterError),
}

impl HostError {
    /// Status code returned across the ABI
    pub fn status(&self) -> i32 {
        match self {
            HostError::InvalidArgument(_) => BF_ERR_INVALID_ARGUMENT,
            HostError::NullHandle => BF_ERR_NULL_HANDLE,
            HostError::Filter(FilterError::AllocationFailed { .. }) => BF_ERR_ALLOCATION,
            HostError::Filter(_) => BF_ERR_INVALID_ARGUMENT,
        }
    }
}
