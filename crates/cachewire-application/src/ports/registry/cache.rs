//! Cache Type Registry
//!
//! Cache types register themselves via `linkme::distributed_slice` and are
//! discovered at runtime by iterating [`CACHE_TYPES`].

use cachewire_domain::CacheInstance;

/// Registry entry for a constructible cache type
///
/// Every registered type is built without arguments. Caches that need
/// arguments are registered in the service container instead.
pub struct CacheTypeEntry {
    /// Type identifier matched against the `class` config key
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Zero-argument constructor
    pub factory: fn() -> Result<CacheInstance, String>,
}

// Auto-collection via linkme distributed slices - cache types submit entries at compile time
#[linkme::distributed_slice]
pub static CACHE_TYPES: [CacheTypeEntry] = [..];

/// Construct a registered cache type by name
///
/// # Returns
/// * `Ok(CacheInstance)` - A fresh instance
/// * `Err(String)` - Type not registered or construction failed
pub fn resolve_cache_type(name: &str) -> Result<CacheInstance, String> {
    if let Some(entry) = CACHE_TYPES.iter().find(|entry| entry.name == name) {
        return (entry.factory)();
    }

    // List available types for helpful error message
    let available: Vec<&str> = CACHE_TYPES.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown cache type '{name}'. Available types: {available:?}"
    ))
}

/// Whether a cache type is registered under `name`
pub fn is_registered(name: &str) -> bool {
    CACHE_TYPES.iter().any(|entry| entry.name == name)
}

/// List all registered cache types
///
/// Returns (name, description) tuples sorted by name. Useful for CLI help.
pub fn list_cache_types() -> Vec<(&'static str, &'static str)> {
    let mut types: Vec<(&'static str, &'static str)> = CACHE_TYPES
        .iter()
        .map(|e| (e.name, e.description))
        .collect();
    types.sort_unstable_by_key(|(name, _)| *name);
    types
}
