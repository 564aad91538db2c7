//! In-process namespaced cache provider
//!
//! Entries live in a `DashMap` for the lifetime of the provider. Ids are
//! stored as `"{namespace}[{id}][{version}]"`. [`CacheProvider::delete_all`]
//! bumps the version of the active namespace and drops that namespace's
//! older entries, leaving other namespaces untouched.

use arc_swap::ArcSwap;
use async_trait::async_trait;
use cachewire_application::ports::registry::{CACHE_TYPES, CacheTypeEntry};
use cachewire_domain::CacheInstance;
use cachewire_domain::constants::INITIAL_NAMESPACE_VERSION;
use cachewire_domain::error::Result;
use cachewire_domain::ports::{CacheProvider, CacheStats, NamespacedCache};
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry {
    data: String,
    expires_at: Option<Instant>,
    namespace: Arc<String>,
    version: u64,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// In-process cache provider with namespace support
pub struct ArrayCache {
    entries: DashMap<String, Entry>,
    namespace: ArcSwap<String>,
    // Survives set_namespace so that switching back to a namespace after
    // delete_all does not resurrect its old entries.
    versions: DashMap<String, u64>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ArrayCache {
    /// Create an empty cache with no namespace
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            namespace: ArcSwap::from_pointee(String::new()),
            versions: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Current version of the active namespace
    pub fn namespace_version(&self) -> u64 {
        self.version_of(self.namespace.load().as_str())
    }

    fn version_of(&self, namespace: &str) -> u64 {
        self.versions
            .get(namespace)
            .map_or(INITIAL_NAMESPACE_VERSION, |v| *v)
    }

    /// Active namespace, its version, and the stored key for `id`
    fn scope(&self, id: &str) -> (Arc<String>, u64, String) {
        let namespace = self.namespace.load_full();
        let version = self.version_of(namespace.as_str());
        let key = format!("{namespace}[{id}][{version}]");
        (namespace, version, key)
    }

    fn live_entry(&self, id: &str) -> Option<String> {
        let (_, _, key) = self.scope(id);
        let found = self
            .entries
            .get(&key)
            .map(|entry| (entry.is_expired(), entry.data.clone()));

        match found {
            Some((false, data)) => Some(data),
            Some((true, _)) => {
                self.entries.remove(&key);
                None
            }
            None => None,
        }
    }
}

impl Default for ArrayCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheProvider for ArrayCache {
    async fn fetch(&self, id: &str) -> Result<Option<String>> {
        let data = self.live_entry(id);
        if data.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        Ok(data)
    }

    async fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.live_entry(id).is_some())
    }

    async fn save(&self, id: &str, data: &str, lifetime: Option<Duration>) -> Result<bool> {
        let (namespace, version, key) = self.scope(id);
        let entry = Entry {
            data: data.to_string(),
            // A lifetime past the clock's range never expires
            expires_at: lifetime.and_then(|ttl| Instant::now().checked_add(ttl)),
            namespace,
            version,
        };
        self.entries.insert(key, entry);
        Ok(true)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let (_, _, key) = self.scope(id);
        self.entries.remove(&key);
        Ok(true)
    }

    async fn delete_all(&self) -> Result<bool> {
        let namespace = self.namespace.load_full();
        let version = *self
            .versions
            .entry(namespace.as_str().to_string())
            .and_modify(|version| *version += 1)
            .or_insert(INITIAL_NAMESPACE_VERSION + 1);
        self.entries
            .retain(|_, entry| entry.namespace != namespace || entry.version >= version);
        tracing::debug!(
            namespace = namespace.as_str(),
            version,
            "Namespace invalidated"
        );
        Ok(true)
    }

    async fn flush_all(&self) -> Result<bool> {
        self.entries.clear();
        self.versions.clear();
        Ok(true)
    }

    async fn stats(&self) -> Result<CacheStats> {
        self.entries.retain(|_, entry| !entry.is_expired());
        Ok(CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len() as u64,
        })
    }

    fn provider_name(&self) -> &str {
        "array"
    }

    fn as_namespaced(&self) -> Option<&dyn NamespacedCache> {
        Some(self)
    }
}

impl NamespacedCache for ArrayCache {
    fn set_namespace(&self, namespace: &str) {
        self.namespace.store(Arc::new(namespace.to_string()));
    }

    fn namespace(&self) -> String {
        self.namespace.load().as_str().to_string()
    }
}

impl std::fmt::Debug for ArrayCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayCache")
            .field("namespace", &self.namespace.load().as_str())
            .field("entries", &self.entries.len())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(CACHE_TYPES)]
static ARRAY_CACHE: CacheTypeEntry = CacheTypeEntry {
    name: "ArrayCache",
    description: "In-process cache with lifetimes and namespace support",
    factory: || Ok(CacheInstance::provider(ArrayCache::new())),
};
