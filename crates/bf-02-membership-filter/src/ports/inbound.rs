//! Inbound Ports (Driving Ports)
//!
//! The API that host bindings, the CLI and tests drive a filter through.

use crate::error::FilterError;

/// Primary membership filter API (Driving Port)
///
/// Implementations must allow `might_contain` from many threads at once while
/// serialising `initialize` against all other calls.
pub trait MembershipFilterApi: Send + Sync {
    /// Take ownership of a copy of `bitmap`, replacing any previous one
    ///
    /// On error the previously installed bitmap stays in force.
    fn initialize(&self, bitmap: &[u8], padding: u32, hash_count: u32) -> Result<(), FilterError>;

    /// Test if a value might be in the filter
    fn might_contain(&self, value: &[u8]) -> bool;

    /// Usable bits of the current bitmap
    fn size_bits(&self) -> u64;

    /// Probes per query of the current bitmap
    fn hash_count(&self) -> u32;
}
