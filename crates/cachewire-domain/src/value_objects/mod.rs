//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`CacheConfig`] | Parsed `doctrine.cache.<key>` sub-configuration |
//! | [`CacheInstance`] | A resolved legacy provider or item pool |

/// Cache configuration value objects
pub mod config;
/// Resolved cache instances
pub mod instance;

pub use config::CacheConfig;
pub use instance::CacheInstance;
