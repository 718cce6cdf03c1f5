//! Service Layer - Shared filter handle
//!
//! Wraps the domain filter for use from several threads.

pub mod shared_filter;

pub use shared_filter::SharedBloomFilter;
