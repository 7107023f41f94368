//! Environment lookup sources.

use std::collections::HashMap;
use std::env;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Key/value source that settings are read from.
///
/// `ProcessEnv` backs real startup; maps and mocks back tests.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EnvSource: Send + Sync {
    /// Look up a variable, `None` when unset
    fn var(&self, key: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                tracing::warn!("{} is not valid unicode, treating as unset", key);
                None
            }
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
