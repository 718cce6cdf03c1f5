//! Ports Layer - Trait definitions
//!
//! - `inbound`: API exposed to callers (driving port)

pub mod inbound;

pub use inbound::MembershipFilterApi;
