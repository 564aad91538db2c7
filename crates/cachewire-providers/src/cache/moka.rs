//! Moka pooled cache-item store
//!
//! High-performance, concurrent item pool using Moka.
//!
//! ## Features
//!
//! - Bounded capacity with automatic eviction
//! - Per-item expiry, checked on read
//! - Deferred saves flushed by `commit`
//!
//! ## Example
//!
//! ```ignore
//! use cachewire_providers::cache::MokaItemPool;
//!
//! let pool = MokaItemPool::with_capacity(1000);
//! let item = pool.get_item("user.1").await?.set("{\"id\":1}");
//! pool.save(item).await?;
//! ```

use crate::constants::{EMPTY_ITEM_VALUE, POOL_DEFAULT_CAPACITY};
use async_trait::async_trait;
use cachewire_application::ports::registry::{CACHE_TYPES, CacheTypeEntry};
use cachewire_domain::CacheInstance;
use cachewire_domain::error::Result;
use cachewire_domain::ports::{CacheItem, CacheItemPool, validate_item_key};
use dashmap::DashMap;
use moka::future::Cache;
use std::time::Instant;

#[derive(Debug, Clone)]
struct StoredItem {
    value: String,
    expires_at: Option<Instant>,
}

impl StoredItem {
    fn from_item(item: &CacheItem) -> Self {
        Self {
            value: item.get().unwrap_or(EMPTY_ITEM_VALUE).to_string(),
            expires_at: item.expires_at(),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// Moka-based pooled cache-item store
///
/// Has no namespace capability.
#[derive(Clone)]
pub struct MokaItemPool {
    cache: Cache<String, StoredItem>,
    deferred: std::sync::Arc<DashMap<String, CacheItem>>,
    capacity: u64,
}

impl Default for MokaItemPool {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaItemPool {
    /// Create a pool with default capacity
    pub fn new() -> Self {
        Self::with_capacity(POOL_DEFAULT_CAPACITY)
    }

    /// Create a pool holding at most `capacity` items
    pub fn with_capacity(capacity: u64) -> Self {
        let cache = Cache::builder().max_capacity(capacity).build();

        Self {
            cache,
            deferred: std::sync::Arc::new(DashMap::new()),
            capacity,
        }
    }

    /// Get the maximum capacity of the pool
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of saves waiting for `commit`
    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }

    async fn lookup(&self, key: &str) -> Option<StoredItem> {
        // A pending save hides the committed value, even once it has expired
        let pending = self
            .deferred
            .get(key)
            .map(|item| StoredItem::from_item(item.value()));
        if let Some(stored) = pending {
            return (!stored.is_expired()).then_some(stored);
        }

        let stored = self.cache.get(key).await?;
        if stored.is_expired() {
            self.cache.invalidate(key).await;
            return None;
        }
        Some(stored)
    }

    async fn store(&self, item: &CacheItem) {
        let stored = StoredItem::from_item(item);
        if stored.is_expired() {
            self.cache.invalidate(item.key()).await;
        } else {
            self.cache.insert(item.key().to_string(), stored).await;
        }
    }
}

#[async_trait]
impl CacheItemPool for MokaItemPool {
    async fn get_item(&self, key: &str) -> Result<CacheItem> {
        validate_item_key(key)?;
        Ok(match self.lookup(key).await {
            Some(stored) => CacheItem::hit(key, stored.value, stored.expires_at),
            None => CacheItem::miss(key),
        })
    }

    async fn has_item(&self, key: &str) -> Result<bool> {
        validate_item_key(key)?;
        Ok(self.lookup(key).await.is_some())
    }

    async fn clear(&self) -> Result<bool> {
        self.deferred.clear();
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        Ok(true)
    }

    async fn delete_item(&self, key: &str) -> Result<bool> {
        validate_item_key(key)?;
        self.deferred.remove(key);
        self.cache.invalidate(key).await;
        Ok(true)
    }

    async fn save(&self, item: CacheItem) -> Result<bool> {
        validate_item_key(item.key())?;
        self.deferred.remove(item.key());
        self.store(&item).await;
        Ok(true)
    }

    async fn save_deferred(&self, item: CacheItem) -> Result<bool> {
        validate_item_key(item.key())?;
        self.deferred.insert(item.key().to_string(), item);
        Ok(true)
    }

    async fn commit(&self) -> Result<bool> {
        let keys: Vec<String> = self.deferred.iter().map(|e| e.key().clone()).collect();
        let mut committed = 0usize;
        for key in keys {
            if let Some((_, item)) = self.deferred.remove(&key) {
                self.store(&item).await;
                committed += 1;
            }
        }
        tracing::debug!(committed, "Deferred cache items committed");
        Ok(true)
    }

    fn pool_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaItemPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaItemPool")
            .field("capacity", &self.capacity)
            .field("entries", &self.cache.entry_count())
            .field("deferred", &self.deferred.len())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(CACHE_TYPES)]
static MOKA_ITEM_POOL: CacheTypeEntry = CacheTypeEntry {
    name: "MokaItemPool",
    description: "Moka high-performance pooled cache-item store",
    factory: || Ok(CacheInstance::pool(MokaItemPool::new())),
};
