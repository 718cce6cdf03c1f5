//! # Bloom Filter Test Suite
//!
//! Cross-crate tests that do not belong to any single member.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # Backend JSON -> filter -> queries, digest agreement
//!     ├── concurrency.rs  # SharedBloomFilter readers vs. re-initializing writer
//!     └── host_abi.rs     # C ABI driven with the backend golden data
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p bf-tests
//!
//! # By category
//! cargo test -p bf-tests integration::concurrency
//! ```

pub mod integration;

/// Shared fixtures for the integration modules
pub mod fixtures {
    use std::path::PathBuf;

    /// Path of a backend fixture under the membership filter crate
    pub fn path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../crates/bf-02-membership-filter/tests/fixtures")
            .join(name)
    }

    /// Contents of a backend fixture
    pub fn read(name: &str) -> String {
        let path = path(name);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("reading fixture {}: {}", path.display(), e))
    }
}
