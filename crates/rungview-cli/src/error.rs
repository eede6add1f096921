//! Error type for the rungview CLI.

use std::path::PathBuf;

use thiserror::Error;

use rungview::RungviewError;

/// Errors surfaced to the CLI user.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode diagram JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to parse TOML configuration: {0}")]
    ConfigParse(String),

    #[error("Missing configuration file: {0}")]
    ConfigMissing(PathBuf),

    #[error(transparent)]
    Render(#[from] RungviewError),
}
