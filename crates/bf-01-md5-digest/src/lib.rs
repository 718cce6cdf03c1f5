//! # BF-01 MD5 Digest
//!
//! Pure-Rust MD5 (RFC 1321) used as the deterministic hash source for the
//! membership filter in `bf-02-membership-filter`.
//!
//! ## Components
//!
//! | Module | Item | Use Case |
//! |--------|------|----------|
//! | `context` | `Md5Context` | Streaming digest over chunked input |
//! | `digest` | `md5_digest` | One-shot digest of a byte slice |
//! | `digest` | `to_hex` / `from_hex` | Hex rendering for logs, tests and the CLI |
//! | `constants` | `INITIAL_STATE`, `SINE_TABLE`, `SHIFTS` | Standard MD5 tables |
//!
//! ## Properties
//!
//! - Output is byte-for-byte identical to the published MD5 test vectors
//! - No shared state: every digest owns its own transient `Md5Context`
//! - Any byte sequence is valid input, including the empty one
//!
//! MD5 is used here as a hash source only. It provides no collision or
//! preimage resistance and must not be used for authentication.
//!
//! ## Usage Example
//!
//! ```
//! use bf_01_md5_digest::{md5_digest, to_hex, Md5Context};
//!
//! let digest = md5_digest(b"abc");
//! assert_eq!(to_hex(&digest), "900150983cd24fb0d6963f7d28e17f72");
//!
//! let mut ctx = Md5Context::new();
//! ctx.update(b"a").update(b"bc");
//! assert_eq!(ctx.finalize(), digest);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod context;
pub mod digest;
pub mod errors;

// Re-exports
pub use constants::{BLOCK_LENGTH, DIGEST_LENGTH};
pub use context::Md5Context;
pub use digest::{from_hex, md5_digest, md5_digest_many, to_hex, Md5Digest};
pub use errors::DigestError;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
