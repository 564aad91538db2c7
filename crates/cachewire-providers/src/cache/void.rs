//! Void cache provider
//!
//! Accepts every write and never returns anything. Useful for disabling
//! caching through configuration alone.

use async_trait::async_trait;
use cachewire_application::ports::registry::{CACHE_TYPES, CacheTypeEntry};
use cachewire_domain::CacheInstance;
use cachewire_domain::error::Result;
use cachewire_domain::ports::{CacheProvider, CacheStats};
use std::time::Duration;

/// Cache provider that doesn't store anything
///
/// Has no namespace capability, so a configured namespace is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidCache;

impl VoidCache {
    /// Create a new void cache
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheProvider for VoidCache {
    async fn fetch(&self, _id: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn contains(&self, _id: &str) -> Result<bool> {
        Ok(false)
    }

    async fn save(&self, _id: &str, _data: &str, _lifetime: Option<Duration>) -> Result<bool> {
        Ok(true)
    }

    async fn delete(&self, _id: &str) -> Result<bool> {
        Ok(true)
    }

    async fn delete_all(&self) -> Result<bool> {
        Ok(true)
    }

    async fn flush_all(&self) -> Result<bool> {
        Ok(true)
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats::new())
    }

    fn provider_name(&self) -> &str {
        "void"
    }
}

#[linkme::distributed_slice(CACHE_TYPES)]
static VOID_CACHE: CacheTypeEntry = CacheTypeEntry {
    name: "VoidCache",
    description: "Cache that stores nothing",
    factory: || Ok(CacheInstance::provider(VoidCache::new())),
};
