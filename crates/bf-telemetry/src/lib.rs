//! # BF Telemetry
//!
//! Structured logging for the Bloom filter workspace.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bf_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _guard = init_telemetry(&config).expect("Failed to init telemetry");
//!
//! tracing::info!("ready");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `bloom-filter` | Service name in log records |
//! | `BF_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `BF_CONSOLE_OUTPUT` | `true` | Write logs to stderr |
//! | `BF_JSON_LOGS` | `false` (`true` in containers) | JSON instead of pretty output |

mod config;
mod tracing_setup;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use tracing_setup::{build_env_filter, init_tracing, TracingGuard};

use thiserror::Error;

#[doc(hidden)]
pub use tracing;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging for a binary.
///
/// Returns a guard that should be held for the lifetime of the application.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TracingGuard, TelemetryError> {
    init_tracing(config)
}

/// Convenience macro for creating a span around filter work.
///
/// # Example
///
/// ```rust
/// let _span = bf_telemetry::filter_span!("golden_replay", documents = 10_000).entered();
/// ```
#[macro_export]
macro_rules! filter_span {
    ($name:expr) => {
        $crate::tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        $crate::tracing::info_span!($name, $($field)*)
    };
}
