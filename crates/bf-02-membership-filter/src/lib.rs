//! # BF-02 Membership Filter
//!
//! Query-only Bloom filter. The bitmap is built by the backend; this crate
//! only answers "might this value be in the set?".
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `BloomFilter`: Owned bitmap plus probe parameters
//!   - `HashSeeds`: MD5 double-hashing probe sequence
//!   - `FilterConfig` / `FilterConfigBuilder`: Limits with validation
//!   - `EncodedBloomFilter`: Backend JSON/base64 wire shape
//!   - `verify_golden`: Replay of backend golden files
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MembershipFilterApi`: Driving port (inbound API)
//!
//! - **Service Layer** (`service/`): Shared access
//!   - `SharedBloomFilter`: Many readers, one writer
//!
//! ## Probe Scheme
//!
//! ```text
//! digest = MD5(value)
//! h1 = u64::from_le_bytes(digest[0..8])
//! h2 = u64::from_le_bytes(digest[8..16])
//! index_i = (h1 + i * h2) mod size        (wrapping u64 arithmetic)
//! bit     = bitmap[index_i / 8] >> (index_i % 8) & 1
//! ```
//!
//! ## Invariants
//!
//! - **No false negatives**: a value the backend encoded always tests `true`
//! - **Owned bitmap**: `initialize` copies; the caller's buffer is never aliased
//! - **Atomic re-initialization**: a failed `initialize` leaves the old filter intact
//!
//! ## Usage Example
//!
//! ```
//! use bf_02_membership_filter::{BloomFilter, EncodedBloomFilter};
//!
//! let encoded = EncodedBloomFilter::from_json(
//!     r#"{ "bits": { "bitmap": "RswZ", "padding": 1 }, "hashCount": 16 }"#,
//! ).unwrap();
//! let filter = BloomFilter::from_encoded(&encoded).unwrap();
//!
//! let prefix = "projects/project-1/databases/database-1/documents/coll/doc";
//! assert!(filter.might_contain(format!("{}0", prefix).as_bytes()));
//! assert!(!filter.might_contain(format!("{}1", prefix).as_bytes()));
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    compute_hash_positions, verify_golden, BloomFilter, EncodedBloomFilter, FilterConfig,
    FilterConfigBuilder, FilterState, GoldenReport, HashSeeds, MembershipTestResults,
    DEFAULT_DOCUMENT_PREFIX,
};
pub use error::FilterError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::MembershipFilterApi;
pub use service::SharedBloomFilter;
