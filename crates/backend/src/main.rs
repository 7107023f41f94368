//! Calculator backend - application entry point
//!
//! Loads settings once and dispatches to the requested command.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calc_backend::{
    cli::{Cli, Commands},
    commands,
};
use calc_settings::Settings;

fn main() {
    let cli = Cli::parse();

    // Verbose mode sets debug level
    init_tracing(cli.verbose);

    let (settings, env_file) = Settings::load_from(cli.env_file.as_deref());
    settings.log_summary();

    let result = match &cli.command {
        Commands::Show(args) => commands::show::execute(args, &settings, &mut std::io::stdout()),
        Commands::Check => commands::check::execute(&settings, env_file),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
