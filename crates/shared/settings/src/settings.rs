//! Application settings loaded once at startup.

use std::path::Path;

use serde::Serialize;

use crate::constants::{ENVIRONMENT, GEMINI_API_KEY_VAR, SERVER_HOST, SERVER_PORT};
use crate::env_file::{load_env_file, EnvFileOutcome};
use crate::error::{ConfigError, ConfigResult};
use crate::secret::ApiKey;
use crate::source::{EnvSource, ProcessEnv};

/// Application settings
///
/// Build once with [`Settings::load`] and pass by reference to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub server_host: String,
    pub port: u16,
    pub environment: String,
    gemini_api_key: Option<ApiKey>,
}

impl Settings {
    /// Load settings from `.env` (if any) and the process environment.
    ///
    /// Never fails. A missing API key leaves [`Settings::api_key`] as `None`.
    pub fn load() -> Self {
        Self::load_from(None).0
    }

    /// Load settings, optionally from an explicit env file instead of `.env`.
    ///
    /// Also returns what happened to the env file, for callers that want
    /// to be strict about it.
    pub fn load_from(env_file: Option<&Path>) -> (Self, EnvFileOutcome) {
        let outcome = load_env_file(env_file);
        (Self::from_source(&ProcessEnv), outcome)
    }

    /// Build settings from an arbitrary source.
    ///
    /// Only the API key is looked up; host, port and environment are fixed.
    pub fn from_source(source: &impl EnvSource) -> Self {
        Self {
            server_host: SERVER_HOST.to_string(),
            port: SERVER_PORT,
            environment: ENVIRONMENT.to_string(),
            gemini_api_key: source.var(GEMINI_API_KEY_VAR).map(ApiKey::from),
        }
    }

    /// Get the Gemini API key exactly as configured.
    pub fn api_key(&self) -> Option<&ApiKey> {
        self.gemini_api_key.as_ref()
    }

    /// Whether a non-empty API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some_and(|key| !key.is_empty())
    }

    /// Get the API key, failing if it is unset or empty.
    pub fn require_api_key(&self) -> ConfigResult<&ApiKey> {
        self.api_key()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::missing_api_key(GEMINI_API_KEY_VAR))
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.port)
    }

    /// Emit the startup diagnostic. The key value is never logged.
    pub fn log_summary(&self) {
        tracing::info!(
            host = %self.server_host,
            port = self.port,
            environment = %self.environment,
            api_key_set = self.has_api_key(),
            "Settings loaded"
        );
        if !self.has_api_key() {
            tracing::warn!("{} is not set", GEMINI_API_KEY_VAR);
        }
    }
}
