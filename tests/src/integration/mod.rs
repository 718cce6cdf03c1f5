//! Cross-crate integration modules

pub mod concurrency;
pub mod flows;
