//! Check command - Verifies the API key is configured.

use calc_settings::{EnvFileOutcome, Settings};

use crate::errors::CliResult;

/// Execute the check command
///
/// A broken env file is an error here, even though loading tolerated it.
pub fn execute(settings: &Settings, env_file: EnvFileOutcome) -> CliResult<()> {
    if let Some(path) = env_file.into_result()? {
        tracing::debug!("Checked env file {}", path.display());
    }

    settings.require_api_key()?;
    tracing::info!("API key is configured");
    Ok(())
}
