//! Service container
//!
//! String-keyed container of type-erased services. Registration and lookup
//! both take `&self`, so one container can be shared behind an `Arc` and
//! filled while other threads resolve from it.

use cachewire_application::{Container, Service};
use cachewire_domain::CacheInstance;
use cachewire_domain::constants::CONFIG_SERVICE_ID;
use cachewire_domain::error::{Error, Result};
use dashmap::DashMap;
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;

/// DashMap-backed [`Container`] implementation
#[derive(Default)]
pub struct ServiceContainer {
    services: DashMap<String, Service>,
}

impl ServiceContainer {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `service` under `id`, returning the service it replaced
    pub fn register<T: Any + Send + Sync>(
        &self,
        id: impl Into<String>,
        service: T,
    ) -> Option<Service> {
        self.register_shared(id, Arc::new(service))
    }

    /// Register an already shared service under `id`
    pub fn register_shared(&self, id: impl Into<String>, service: Service) -> Option<Service> {
        let id = id.into();
        tracing::trace!(service = %id, "Registering service");
        self.services.insert(id, service)
    }

    /// Register `service` unless `id` is taken; returns whichever is registered
    pub fn register_if_absent(&self, id: impl Into<String>, service: Service) -> Service {
        Arc::clone(self.services.entry(id.into()).or_insert(service).value())
    }

    /// Register the configuration tree under the `config` id
    pub fn register_config(&self, tree: Value) -> Option<Service> {
        self.register(CONFIG_SERVICE_ID, tree)
    }

    /// Register a cache so configurations can name it by `id`
    pub fn register_cache(&self, id: impl Into<String>, cache: CacheInstance) -> Option<Service> {
        self.register(id, cache)
    }

    /// Remove the service under `id`
    pub fn remove(&self, id: &str) -> Option<Service> {
        self.services.remove(id).map(|(_, service)| service)
    }

    /// Registered service ids, sorted
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.services.iter().map(|e| e.key().clone()).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether no service is registered
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Container for ServiceContainer {
    fn has(&self, id: &str) -> bool {
        self.services.contains_key(id)
    }

    fn get(&self, id: &str) -> Result<Service> {
        self.services
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| Error::not_found(format!("service '{id}'")))
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("services", &self.ids())
            .finish()
    }
}
