//! Domain layer constants
//!
//! Well-known identifiers used when reading cache configuration out of
//! a service container.

// ============================================================================
// CONTAINER CONSTANTS
// ============================================================================

/// Service id under which the application configuration tree is registered
pub const CONFIG_SERVICE_ID: &str = "config";

/// Top-level configuration node holding all factory sections
pub const CONFIG_ROOT_KEY: &str = "doctrine";

/// Configuration section read by the cache factory
pub const CACHE_SECTION: &str = "cache";

/// Config key used when a factory is created without one
pub const DEFAULT_CONFIG_KEY: &str = "orm_default";

// ============================================================================
// CACHE CONFIG KEYS
// ============================================================================

/// Required key naming the cache type or container service
pub const CLASS_KEY: &str = "class";

/// Optional key holding the namespace applied to namespaced caches
pub const NAMESPACE_KEY: &str = "namespace";

// ============================================================================
// CACHE BEHAVIOR CONSTANTS
// ============================================================================

/// Namespace version a namespaced cache starts from
pub const INITIAL_NAMESPACE_VERSION: u64 = 1;

/// Characters a pooled cache item key must not contain
pub const RESERVED_KEY_CHARACTERS: &str = "{}()/\\@:";
