//! Composition root
//!
//! Builds the service container from [`AppConfig`] and hands out shared
//! caches. A cache resolved through [`AppContext::cache`] is registered under
//! `doctrine.cache.<key>`, so every later lookup of that key returns the
//! same instance.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let cache = context.cache("orm_default")?;
//! ```

use crate::config::AppConfig;
use crate::di::container::ServiceContainer;
use cachewire_application::factories::dependency_id;
use cachewire_application::ports::registry::list_cache_types;
use cachewire_application::CacheFactory;
use cachewire_domain::CacheInstance;
use cachewire_domain::constants::CACHE_SECTION;
use cachewire_domain::error::{Error, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Application context: configuration plus the service container
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    container: Arc<ServiceContainer>,
}

/// Build the service container for `config`
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let container = Arc::new(ServiceContainer::new());
    container.register_config(config.to_tree()?);

    info!(
        caches = config.doctrine.cache.len(),
        cache_types = list_cache_types().len(),
        "Service container initialized"
    );

    Ok(AppContext {
        config: Arc::new(config),
        container,
    })
}

impl AppContext {
    /// The service container
    pub fn container(&self) -> &Arc<ServiceContainer> {
        &self.container
    }

    /// Shared cache for `key`, resolved on first use
    pub fn cache(&self, key: &str) -> Result<CacheInstance> {
        let id = dependency_id(CACHE_SECTION, key);
        let cache = CacheFactory::retrieve(self.container.as_ref(), key)?;
        // A concurrent caller may have registered first; its instance wins
        let shared = self.container.register_if_absent(id.clone(), Arc::new(cache));
        debug!(service = %id, "Shared cache ready");
        shared
            .downcast::<CacheInstance>()
            .map(|cache| cache.as_ref().clone())
            .map_err(|_| Error::unresolvable_type(id, "service is not a cache"))
    }

    /// Resolve every configured cache, in key order
    pub fn caches(&self) -> Result<Vec<(String, CacheInstance)>> {
        self.config
            .cache_keys()
            .into_iter()
            .map(|key| Ok((key.to_string(), self.cache(key)?)))
            .collect()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("caches", &self.config.cache_keys())
            .field("container", &self.container)
            .finish()
    }
}
