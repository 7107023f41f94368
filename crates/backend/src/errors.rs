//! CLI error handling.

use calc_settings::ConfigError;
use thiserror::Error;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type CliResult<T> = Result<T, CliError>;
