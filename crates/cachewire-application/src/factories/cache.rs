//! Cache factory
//!
//! Resolves the `doctrine.cache.<config_key>` configuration into a cache:
//!
//! 1. read the sub-configuration (missing nodes are empty)
//! 2. require `class`
//! 3. take `class` from the container, or build it from the type registry
//! 4. apply `namespace` when the cache supports namespacing

use super::{Factory, retrieve_config, retrieve_dependency};
use crate::ports::container::{Container, ContainerExt};
use crate::ports::registry::resolve_cache_type;
use cachewire_domain::constants::{CACHE_SECTION, DEFAULT_CONFIG_KEY};
use cachewire_domain::error::{Error, Result};
use cachewire_domain::{CacheConfig, CacheInstance};
use tracing::debug;

/// Builds legacy cache providers and item pools from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheFactory {
    config_key: String,
}

impl CacheFactory {
    /// Create a factory bound to `config_key`
    pub fn new(config_key: impl Into<String>) -> Self {
        Self {
            config_key: config_key.into(),
        }
    }

    /// Resolve the cache configured under `doctrine.cache.<config_key>`
    pub fn resolve(container: &dyn Container, config_key: &str) -> Result<CacheInstance> {
        Self::new(config_key).invoke(container)
    }

    /// Like [`CacheFactory::resolve`], but a `doctrine.cache.<config_key>`
    /// service registered in the container wins over configuration
    pub fn retrieve(container: &dyn Container, config_key: &str) -> Result<CacheInstance> {
        retrieve_dependency(container, config_key, CACHE_SECTION, Self::resolve)
    }

    fn instantiate(container: &dyn Container, class: &str) -> Result<CacheInstance> {
        if container.has(class) {
            debug!(class, "Taking cache from container");
            let shared = container.get_typed::<CacheInstance>(class)?;
            return Ok(shared.as_ref().clone());
        }

        debug!(class, "Constructing cache from type registry");
        resolve_cache_type(class).map_err(|reason| Error::unresolvable_type(class, reason))
    }
}

impl Default for CacheFactory {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_KEY)
    }
}

impl Factory for CacheFactory {
    type Output = CacheInstance;

    fn config_key(&self) -> &str {
        &self.config_key
    }

    fn create_with_config(
        &self,
        container: &dyn Container,
        config_key: &str,
    ) -> Result<CacheInstance> {
        let raw = retrieve_config(
            container,
            config_key,
            CACHE_SECTION,
            self.default_config(config_key),
        )?;
        let config = CacheConfig::from_map(&raw)?;

        let cache = Self::instantiate(container, &config.class)?;

        if let (Some(namespace), Some(namespaced)) =
            (config.namespace.as_deref(), cache.as_namespaced())
        {
            debug!(config_key, namespace, "Applying cache namespace");
            namespaced.set_namespace(namespace);
        }

        debug!(
            config_key,
            class = %config.class,
            kind = cache.kind(),
            "Cache resolved"
        );
        Ok(cache)
    }
}
