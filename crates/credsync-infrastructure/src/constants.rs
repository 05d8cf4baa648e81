//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Protocol constants are defined in `credsync_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "credsync.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "credsync";

/// Environment variable prefix for configuration
///
/// Variables take the form `CREDSYNC__SECTION__KEY`.
pub const CONFIG_ENV_PREFIX: &str = "CREDSYNC";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "CREDSYNC_LOG";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "credsync";
