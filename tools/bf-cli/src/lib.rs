//! bf: command-line driver for the Bloom filter workspace
//!
//! ```text
//! bf digest <TEXT> | --file <PATH>
//! bf query --bitmap <BASE64> [--padding N] --hash-count K <VALUE>...
//! bf golden --filter <proto.json> --results <result.json> [--prefix P]
//! ```

pub mod commands;
pub mod error;

pub use commands::{digest_file, digest_text, golden, query, QueryResult};
pub use error::CliError;
