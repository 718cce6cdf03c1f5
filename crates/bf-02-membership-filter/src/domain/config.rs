//! Filter configuration and validation
//!
//! Limits applied when a filter takes ownership of a bitmap. The defaults are
//! far above anything the backend produces, so they only stop runaway input.
//!
//! # Example
//!
//! ```
//! use bf_02_membership_filter::domain::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .max_bitmap_bytes(1 << 20)
//!     .max_hash_count(64)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.max_hash_count, 64);
//! ```

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Default cap on bitmap size: 64 MiB.
pub const DEFAULT_MAX_BITMAP_BYTES: usize = 64 * 1024 * 1024;

/// Default cap on probes per query.
pub const DEFAULT_MAX_HASH_COUNT: u32 = 1_000_000;

/// Limits enforced on `initialize`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Largest bitmap a filter will copy in
    pub max_bitmap_bytes: usize,
    /// Largest accepted hash count
    pub max_hash_count: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_bitmap_bytes: DEFAULT_MAX_BITMAP_BYTES,
            max_hash_count: DEFAULT_MAX_HASH_COUNT,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(max_bitmap_bytes: usize, max_hash_count: u32) -> Result<Self, FilterError> {
        let config = Self {
            max_bitmap_bytes,
            max_hash_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BF_MAX_BITMAP_BYTES`: bitmap cap in bytes (default: 64 MiB)
    /// - `BF_MAX_HASH_COUNT`: hash count cap (default: 1000000)
    ///
    /// Unparseable values fall back to the defaults. Parsed values are
    /// validated, so `BF_MAX_BITMAP_BYTES=0` is an error.
    pub fn from_env() -> Result<Self, FilterError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// `from_env` over any variable source
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, FilterError> {
        let config = Self {
            max_bitmap_bytes: var("BF_MAX_BITMAP_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BITMAP_BYTES),

            max_hash_count: var("BF_MAX_HASH_COUNT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_HASH_COUNT),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the limits themselves
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.max_bitmap_bytes == 0 {
            return Err(FilterError::InvalidArgument(
                "max_bitmap_bytes cannot be 0".to_string(),
            ));
        }

        // Bit indices are u64; the usable bit count must not overflow it.
        if (self.max_bitmap_bytes as u64).checked_mul(8).is_none() {
            return Err(FilterError::InvalidArgument(
                "max_bitmap_bytes overflows the bit index range".to_string(),
            ));
        }

        Ok(())
    }

    /// Check a bitmap length and hash count against the limits
    pub fn check(&self, bitmap_len: usize, hash_count: u32) -> Result<(), FilterError> {
        if bitmap_len > self.max_bitmap_bytes {
            return Err(FilterError::BitmapTooLarge {
                len: bitmap_len,
                max: self.max_bitmap_bytes,
            });
        }

        if hash_count > self.max_hash_count {
            return Err(FilterError::HashCountTooLarge {
                count: hash_count,
                max: self.max_hash_count,
            });
        }

        Ok(())
    }

    /// Builder-style method to set the bitmap cap
    pub fn with_max_bitmap_bytes(mut self, max: usize) -> Self {
        self.max_bitmap_bytes = max;
        self
    }

    /// Builder-style method to set the hash count cap
    pub fn with_max_hash_count(mut self, max: u32) -> Self {
        self.max_hash_count = max;
        self
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    max_bitmap_bytes: Option<usize>,
    max_hash_count: Option<u32>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bitmap cap in bytes
    pub fn max_bitmap_bytes(mut self, bytes: usize) -> Self {
        self.max_bitmap_bytes = Some(bytes);
        self
    }

    /// Set the hash count cap
    pub fn max_hash_count(mut self, count: u32) -> Self {
        self.max_hash_count = Some(count);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        let config = FilterConfig {
            max_bitmap_bytes: self.max_bitmap_bytes.unwrap_or(defaults.max_bitmap_bytes),
            max_hash_count: self.max_hash_count.unwrap_or(defaults.max_hash_count),
        };

        config.validate()?;
        Ok(config)
    }
}
