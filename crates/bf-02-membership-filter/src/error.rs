//! Error types for the membership filter

use thiserror::Error;

/// Errors that can occur while building or configuring a filter.
///
/// Queries never fail; every variant here is raised before any filter state
/// is touched.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Negative {what}: {value}")]
    NegativeValue { what: &'static str, value: i64 },

    #[error("Padding exceeds bitmap capacity: {padding} > {capacity} bits")]
    PaddingExceedsCapacity { padding: u64, capacity: u64 },

    #[error("Hash count exceeds maximum: {count} > {max}")]
    HashCountTooLarge { count: u32, max: u32 },

    #[error("Bitmap exceeds maximum: {len} bytes > {max}")]
    BitmapTooLarge { len: usize, max: usize },

    #[error("Failed to allocate {bytes} bytes for bitmap")]
    AllocationFailed { bytes: usize },

    #[error("Invalid base64 bitmap: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl FilterError {
    /// Whether the error was caused by caller input (as opposed to resources).
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, FilterError::AllocationFailed { .. })
    }
}

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        FilterError::SerializationError(err.to_string())
    }
}
