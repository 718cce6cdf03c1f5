//! Digest error types.

use thiserror::Error;

/// Errors from parsing digest text. Computing a digest never fails.
#[derive(Debug, Error)]
pub enum DigestError {
    /// Hex string has the wrong length
    #[error("Invalid hex digest length: expected {expected}, got {actual}")]
    InvalidHexLength {
        /// Expected number of hex characters
        expected: usize,
        /// Actual number of characters
        actual: usize,
    },

    /// Hex string contains a non-hex character
    #[error("Invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
