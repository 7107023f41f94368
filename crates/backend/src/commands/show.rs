//! Show command - Prints the loaded settings with secrets redacted.

use std::io::Write;

use calc_settings::{Settings, REDACTED};

use crate::cli::ShowArgs;
use crate::errors::CliResult;

/// Execute the show command
pub fn execute(args: &ShowArgs, settings: &Settings, out: &mut impl Write) -> CliResult<()> {
    if args.json {
        serde_json::to_writer_pretty(&mut *out, settings)?;
        writeln!(out)?;
        return Ok(());
    }

    let api_key = match settings.api_key() {
        Some(_) if settings.has_api_key() => REDACTED,
        Some(_) => "(empty)",
        None => "(unset)",
    };

    writeln!(out, "server_host     {}", settings.server_host)?;
    writeln!(out, "port            {}", settings.port)?;
    writeln!(out, "environment     {}", settings.environment)?;
    writeln!(out, "gemini_api_key  {}", api_key)?;
    Ok(())
}
