//! Application-wide constants
//!
//! Fixed values exposed by `Settings`. None of these depend on environment state.

// =============================================================================
// Server
// =============================================================================

/// Server host address
pub const SERVER_HOST: &str = "localhost";

/// Server port
pub const SERVER_PORT: u16 = 8900;

// =============================================================================
// Environment
// =============================================================================

/// Environment label for this deployment
pub const ENVIRONMENT: &str = "dev";

/// Default env file name, searched for in the working directory and its ancestors
pub const DEFAULT_ENV_FILE: &str = ".env";

// =============================================================================
// Secrets
// =============================================================================

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Placeholder rendered in place of secret values
pub const REDACTED: &str = "[REDACTED]";
