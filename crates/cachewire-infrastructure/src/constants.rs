//! Infrastructure layer constants
//!
//! Domain identifiers (`config`, `doctrine`, `cache`) are defined in
//! `cachewire_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cachewire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cachewire";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CACHEWIRE";

/// Separator for nested keys in environment variables
/// (e.g. `CACHEWIRE_DOCTRINE__CACHE__ORM_DEFAULT__CLASS`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "CACHEWIRE_LOG";
