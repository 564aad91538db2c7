//! Legacy Cache Provider Port
//!
//! Port for in-process style cache providers addressed by string ids.
//! Values are stored as JSON text, the same way regardless of backend.
//!
//! ## Namespacing
//!
//! Some providers prefix every id with a namespace so that logically
//! distinct caches can share a backing store. Support is optional and is
//! discovered through [`CacheProvider::as_namespaced`] rather than being
//! required of every implementation.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache Operation Statistics
///
/// # Example
///
/// ```ignore
/// use cachewire_domain::ports::CacheStats;
///
/// let stats = cache.stats().await?;
/// println!("Hit rate: {:.1}%", stats.hit_rate() * 100.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of live cache entries
    pub entries: u64,
}

impl CacheStats {
    /// Create empty cache statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Hit rate from hits and misses (0.0 when nothing was looked up)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Optional namespace capability
///
/// Implemented by providers that can scope their ids under a namespace.
/// `set_namespace` takes `&self`: providers are shared behind `Arc`, so
/// implementations keep the namespace behind interior mutability.
pub trait NamespacedCache: Send + Sync {
    /// Replace the namespace used for subsequent operations
    fn set_namespace(&self, namespace: &str);

    /// The namespace currently in effect (empty when none was set)
    fn namespace(&self) -> String;
}

/// Cache Provider Port
///
/// # Implementations
///
/// - **ArrayCache**: in-process store, namespaced
/// - **VoidCache**: stores nothing
///
/// # Example
///
/// ```ignore
/// use cachewire_domain::ports::CacheProvider;
///
/// cache.save("user:123", &user_json, Some(Duration::from_secs(300))).await?;
/// if let Some(json) = cache.fetch("user:123").await? {
///     let user: User = serde_json::from_str(&json)?;
/// }
/// ```
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Fetch the JSON stored under `id`, `None` on miss or expiry
    async fn fetch(&self, id: &str) -> Result<Option<String>>;

    /// Check whether `id` holds a live entry
    async fn contains(&self, id: &str) -> Result<bool>;

    /// Store JSON under `id`
    ///
    /// # Arguments
    /// * `id` - The cache id
    /// * `data` - The JSON text to store
    /// * `lifetime` - Time to live; `None` keeps the entry until removed
    ///
    /// # Returns
    /// True if the entry was stored
    async fn save(&self, id: &str, data: &str, lifetime: Option<Duration>) -> Result<bool>;

    /// Delete the entry under `id`
    ///
    /// # Returns
    /// True if the cache no longer holds `id` (also when it never did)
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Delete every entry of the current namespace
    async fn delete_all(&self) -> Result<bool>;

    /// Remove everything from the backing store, regardless of namespace
    async fn flush_all(&self) -> Result<bool>;

    /// Get cache statistics
    async fn stats(&self) -> Result<CacheStats>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Namespace capability, if this provider supports it
    fn as_namespaced(&self) -> Option<&dyn NamespacedCache> {
        None
    }
}
