//! Calculator backend operator CLI.
//!
//! # CLI Usage
//!
//! ```bash
//! # Show the redacted settings
//! cargo run -p calc-backend -- show
//!
//! # Same, as JSON, with an explicit env file
//! cargo run -p calc-backend -- --env-file deploy/dev.env show --json
//!
//! # Fail unless GEMINI_API_KEY is configured
//! cargo run -p calc-backend -- check
//! ```

pub mod cli;
pub mod commands;
pub mod errors;

pub use errors::{CliError, CliResult};
