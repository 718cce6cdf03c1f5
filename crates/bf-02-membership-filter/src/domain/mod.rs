//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Core Bloom filter implementation
//! - MD5 double-hashing probe scheme
//! - Configuration limits
//! - Backend wire shape and golden-file replay
//!
//! RULES:
//! - No I/O operations
//! - No locking
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod encoded;
pub mod golden;
pub mod hash_functions;

pub use bloom_filter::{non_negative, BloomFilter, FilterState};
pub use config::{FilterConfig, FilterConfigBuilder, DEFAULT_MAX_BITMAP_BYTES, DEFAULT_MAX_HASH_COUNT};
pub use encoded::{BitSequence, EncodedBloomFilter};
pub use golden::{verify_golden, GoldenMismatch, GoldenReport, MembershipTestResults, DEFAULT_DOCUMENT_PREFIX};
pub use hash_functions::{compute_hash_positions, HashSeeds};
