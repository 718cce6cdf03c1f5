//! CLI error types

use std::path::PathBuf;

use bf_02_membership_filter::FilterError;
use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Filter(#[from] FilterError),
}
