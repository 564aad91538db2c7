//! Resolved cache instances

use crate::ports::{CacheItemPool, CacheProvider, NamespacedCache};
use std::sync::Arc;

/// A cache produced by the cache factory
///
/// Cloning is cheap and keeps identity: both variants hold an `Arc`, so a
/// cache shared through a container stays the same object for every caller.
#[derive(Debug, Clone)]
pub enum CacheInstance {
    /// Legacy in-process cache provider
    Provider(Arc<dyn CacheProvider>),
    /// Pooled cache-item store
    Pool(Arc<dyn CacheItemPool>),
}

impl CacheInstance {
    /// Wrap a legacy provider
    pub fn provider<P: CacheProvider + 'static>(provider: P) -> Self {
        Self::Provider(Arc::new(provider))
    }

    /// Wrap an item pool
    pub fn pool<P: CacheItemPool + 'static>(pool: P) -> Self {
        Self::Pool(Arc::new(pool))
    }

    /// "provider" or "pool"
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Provider(_) => "provider",
            Self::Pool(_) => "pool",
        }
    }

    /// Implementation name reported by the underlying cache
    pub fn name(&self) -> &str {
        match self {
            Self::Provider(provider) => provider.provider_name(),
            Self::Pool(pool) => pool.pool_name(),
        }
    }

    /// Namespace capability of the underlying cache, if any
    pub fn as_namespaced(&self) -> Option<&dyn NamespacedCache> {
        match self {
            Self::Provider(provider) => provider.as_namespaced(),
            Self::Pool(pool) => pool.as_namespaced(),
        }
    }

    /// The legacy provider, if this is one
    pub fn as_provider(&self) -> Option<&Arc<dyn CacheProvider>> {
        match self {
            Self::Provider(provider) => Some(provider),
            Self::Pool(_) => None,
        }
    }

    /// The item pool, if this is one
    pub fn as_pool(&self) -> Option<&Arc<dyn CacheItemPool>> {
        match self {
            Self::Pool(pool) => Some(pool),
            Self::Provider(_) => None,
        }
    }

    /// Whether both handles point at the same cache object
    pub fn same_instance(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Provider(a), Self::Provider(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (Self::Pool(a), Self::Pool(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            _ => false,
        }
    }
}
