//! Env file loading.
//!
//! Merges a dotenv-format file into the process environment before settings
//! are read. The whole file is parsed before anything is applied, so a file
//! with a bad line leaves the environment untouched. Variables already
//! present in the process are never overridden, so repeated loads are
//! idempotent.

use std::env;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_ENV_FILE;
use crate::error::{ConfigError, ConfigResult};

/// Result of attempting to load an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileOutcome {
    /// File found and merged
    Loaded(PathBuf),
    /// No file at the requested location
    Absent,
    /// File found but could not be read or parsed; nothing was applied
    Invalid { path: PathBuf, message: String },
}

impl EnvFileOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, EnvFileOutcome::Loaded(_))
    }

    /// Strict view for callers that treat a broken file as fatal.
    /// A missing file is still fine.
    pub fn into_result(self) -> ConfigResult<Option<PathBuf>> {
        match self {
            EnvFileOutcome::Loaded(path) => Ok(Some(path)),
            EnvFileOutcome::Absent => Ok(None),
            EnvFileOutcome::Invalid { path, message } => Err(ConfigError::env_file(path, message)),
        }
    }
}

/// Find `.env` in `start` or the nearest ancestor that has one.
pub fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DEFAULT_ENV_FILE))
        .find(|candidate| candidate.is_file())
}

/// Load an env file into the process environment.
///
/// `None` searches for `.env` in the working directory and its ancestors.
/// Never fails: an absent file is a silent no-op and an invalid one is logged.
pub fn load_env_file(path: Option<&Path>) -> EnvFileOutcome {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match env::current_dir().ok().and_then(|cwd| find_env_file(&cwd)) {
            Some(found) => found,
            None => {
                tracing::debug!("No env file found, using process environment only");
                return EnvFileOutcome::Absent;
            }
        },
    };

    let entries = match dotenvy::from_path_iter(&path) {
        Ok(iter) => iter.collect::<Result<Vec<_>, _>>(),
        Err(e) => Err(e),
    };

    match entries {
        Ok(entries) => {
            for (key, value) in entries {
                if env::var_os(&key).is_none() {
                    env::set_var(key, value);
                }
            }
            tracing::debug!("Loaded env file {}", path.display());
            EnvFileOutcome::Loaded(path)
        }
        Err(e) if e.not_found() => {
            tracing::debug!("No env file at {}, using process environment only", path.display());
            EnvFileOutcome::Absent
        }
        Err(e) => {
            tracing::warn!("Ignoring env file {}: {}", path.display(), e);
            EnvFileOutcome::Invalid {
                path,
                message: e.to_string(),
            }
        }
    }
}
