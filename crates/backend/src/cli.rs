//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Calculator backend - settings inspection
#[derive(Parser, Debug)]
#[command(name = "calc-backend")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Env file to load instead of searching for `.env`
    #[arg(long, global = true, env = "ENV_FILE")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the loaded settings with secrets redacted
    Show(ShowArgs),

    /// Exit with an error unless the API key is configured
    Check,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_json_with_env_file() {
        let cli = Cli::try_parse_from(["calc-backend", "show", "--json", "--env-file", "dev.env"])
            .unwrap();

        assert_eq!(cli.env_file, Some(PathBuf::from("dev.env")));
        assert!(matches!(cli.command, Commands::Show(ShowArgs { json: true })));
    }

    #[test]
    fn test_parse_check_verbose() {
        let cli = Cli::try_parse_from(["calc-backend", "-v", "check"]).unwrap();

        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["calc-backend"]).is_err());
    }
}
