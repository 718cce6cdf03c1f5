//! # Benchmark Suites
//!
//! - `bf_01_md5_digest` - digest throughput, one-shot vs. streaming
//! - `bf_02_membership_filter` - query cost, initialization cost, contention

pub mod bf_01_md5_digest;
pub mod bf_02_membership_filter;
