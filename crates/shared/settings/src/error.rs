//! Configuration errors.
//!
//! Loading settings never fails. These errors only surface when a caller
//! asks for stricter guarantees, such as a present API key.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} is not set")]
    MissingApiKey { var: &'static str },

    #[error("Invalid env file {}: {message}", path.display())]
    EnvFile { path: PathBuf, message: String },
}

impl ConfigError {
    /// Get error code for operators
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::MissingApiKey { .. } => "MISSING_API_KEY",
            ConfigError::EnvFile { .. } => "INVALID_ENV_FILE",
        }
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience constructors
impl ConfigError {
    pub fn missing_api_key(var: &'static str) -> Self {
        ConfigError::MissingApiKey { var }
    }

    pub fn env_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::EnvFile {
            path: path.into(),
            message: message.into(),
        }
    }
}
