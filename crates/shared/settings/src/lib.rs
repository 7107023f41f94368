//! Calculator backend settings.
//!
//! This crate provides:
//! - Fixed server constants (host, port, environment label)
//! - `.env` file loading that never fails the process
//! - The `Settings` struct, built once at startup and passed by reference
//! - A redacted `ApiKey` wrapper for the Gemini credential

pub mod constants;
pub mod env_file;
pub mod error;
pub mod secret;
pub mod settings;
pub mod source;

pub use constants::*;
pub use env_file::{find_env_file, load_env_file, EnvFileOutcome};
pub use error::{ConfigError, ConfigResult};
pub use secret::ApiKey;
pub use settings::Settings;
pub use source::{EnvSource, ProcessEnv};

#[cfg(any(test, feature = "test-utils"))]
pub use source::MockEnvSource;
