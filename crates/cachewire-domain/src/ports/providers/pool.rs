//! Pooled Cache-Item Store Port
//!
//! Item-oriented cache API: callers get a [`CacheItem`] for a key, fill it
//! and hand it back to the pool. Saves may be deferred and flushed later
//! with [`CacheItemPool::commit`].

use crate::constants::RESERVED_KEY_CHARACTERS;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::{Duration, Instant};

use super::cache::NamespacedCache;

/// A single cache entry handed out by a [`CacheItemPool`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheItem {
    key: String,
    value: Option<String>,
    hit: bool,
    expires_at: Option<Instant>,
}

impl CacheItem {
    /// An empty item for `key`, as returned on a cache miss
    pub fn miss<S: Into<String>>(key: S) -> Self {
        Self {
            key: key.into(),
            value: None,
            hit: false,
            expires_at: None,
        }
    }

    /// An item found in the pool
    pub fn hit<S: Into<String>>(key: S, value: String, expires_at: Option<Instant>) -> Self {
        Self {
            key: key.into(),
            value: Some(value),
            hit: true,
            expires_at,
        }
    }

    /// The item key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The JSON value, `None` for a miss that was never filled
    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the lookup that produced this item found a live entry
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Absolute expiry, if any
    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    /// Set the JSON value to store
    pub fn set<S: Into<String>>(mut self, value: S) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Expire the item `ttl` from now
    ///
    /// A `ttl` past the clock's range leaves the item without expiry.
    pub fn expires_after(mut self, ttl: Duration) -> Self {
        self.expires_at = Instant::now().checked_add(ttl);
        self
    }

    /// Remaining time to live, `None` when the item never expires
    pub fn remaining_ttl(&self) -> Option<Duration> {
        self.expires_at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }
}

/// Reject empty keys and keys containing reserved characters
pub fn validate_item_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_argument("Cache item key cannot be empty"));
    }
    if let Some(c) = key.chars().find(|c| RESERVED_KEY_CHARACTERS.contains(*c)) {
        return Err(Error::invalid_argument(format!(
            "Cache item key \"{key}\" contains reserved character '{c}'"
        )));
    }
    Ok(())
}

/// Cache Item Pool Port
///
/// Every method taking a key validates it with [`validate_item_key`] and
/// fails with [`Error::InvalidArgument`] for a bad key.
#[async_trait]
pub trait CacheItemPool: Send + Sync + std::fmt::Debug {
    /// Item for `key`; a miss still returns an item with `is_hit() == false`
    async fn get_item(&self, key: &str) -> Result<CacheItem>;

    /// Items for several keys, in order
    async fn get_items(&self, keys: &[&str]) -> Result<Vec<CacheItem>> {
        let mut items = Vec::with_capacity(keys.len());
        for key in keys {
            items.push(self.get_item(key).await?);
        }
        Ok(items)
    }

    /// Whether `key` holds a live entry
    async fn has_item(&self, key: &str) -> Result<bool>;

    /// Remove every item, including pending deferred saves
    async fn clear(&self) -> Result<bool>;

    /// Remove the item under `key`
    async fn delete_item(&self, key: &str) -> Result<bool>;

    /// Remove several items
    async fn delete_items(&self, keys: &[&str]) -> Result<bool> {
        let mut all = true;
        for key in keys {
            all &= self.delete_item(key).await?;
        }
        Ok(all)
    }

    /// Persist an item immediately
    async fn save(&self, item: CacheItem) -> Result<bool>;

    /// Queue an item until the next [`CacheItemPool::commit`]
    async fn save_deferred(&self, item: CacheItem) -> Result<bool>;

    /// Persist every deferred item
    async fn commit(&self) -> Result<bool>;

    /// Get the name/identifier of this pool implementation
    fn pool_name(&self) -> &str;

    /// Namespace capability, if this pool supports it
    fn as_namespaced(&self) -> Option<&dyn NamespacedCache> {
        None
    }
}
