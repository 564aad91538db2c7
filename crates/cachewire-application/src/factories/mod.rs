//! Configuration-driven factories
//!
//! Factories are bound to a config key and build their product from the
//! `doctrine.<section>.<config_key>` node of the configuration tree found in
//! a [`Container`].
//!
//! ```text
//! container["config"]
//!     └── doctrine
//!         └── <section>           e.g. "cache"
//!             └── <config_key>    e.g. "orm_default"
//!                 ├── class
//!                 └── namespace
//! ```

pub mod cache;

pub use cache::CacheFactory;

use crate::ports::container::{Container, ContainerExt};
use cachewire_domain::constants::{CONFIG_ROOT_KEY, CONFIG_SERVICE_ID};
use cachewire_domain::error::{Error, Result};
use serde_json::{Map, Value};
use std::any::Any;

/// A factory bound to one config key
pub trait Factory {
    /// What the factory builds
    type Output;

    /// The config key this factory was created for
    fn config_key(&self) -> &str;

    /// Build the product for `config_key`
    fn create_with_config(&self, container: &dyn Container, config_key: &str)
    -> Result<Self::Output>;

    /// Values merged under the user's configuration for `config_key`
    fn default_config(&self, _config_key: &str) -> Map<String, Value> {
        Map::new()
    }

    /// Build the product for the bound config key
    fn invoke(&self, container: &dyn Container) -> Result<Self::Output> {
        self.create_with_config(container, self.config_key())
    }
}

/// Read `doctrine.<section>.<config_key>` from the container's configuration
///
/// A missing `config` service or a missing node anywhere on the path yields
/// `defaults`. When the node exists, its keys take precedence over
/// `defaults`. A leaf that is not a mapping is a configuration error.
pub fn retrieve_config(
    container: &dyn Container,
    config_key: &str,
    section: &str,
    defaults: Map<String, Value>,
) -> Result<Map<String, Value>> {
    if !container.has(CONFIG_SERVICE_ID) {
        return Ok(defaults);
    }

    let application_config = container
        .get_typed::<Value>(CONFIG_SERVICE_ID)
        .map_err(|e| {
            Error::configuration_with_source(
                format!("\"{CONFIG_SERVICE_ID}\" service is not a configuration tree"),
                e,
            )
        })?;

    let node = application_config
        .get(CONFIG_ROOT_KEY)
        .and_then(|root| root.get(section))
        .and_then(|section_config| section_config.get(config_key));

    match node {
        None => Ok(defaults),
        Some(Value::Object(user)) => {
            let mut merged = user.clone();
            for (key, value) in defaults {
                merged.entry(key).or_insert(value);
            }
            Ok(merged)
        }
        Some(other) => Err(Error::configuration(format!(
            "{CONFIG_ROOT_KEY}.{section}.{config_key} must be a mapping, got {other}"
        ))),
    }
}

/// Container id of a pre-built `doctrine.<section>.<config_key>` service
pub fn dependency_id(section: &str, config_key: &str) -> String {
    format!("{CONFIG_ROOT_KEY}.{section}.{config_key}")
}

/// Prefer a `doctrine.<section>.<config_key>` service, else build one
///
/// Lets applications register a named product directly in the container
/// and have every factory that depends on it pick that one up.
pub fn retrieve_dependency<T, F>(
    container: &dyn Container,
    config_key: &str,
    section: &str,
    build: F,
) -> Result<T>
where
    T: Any + Clone + Send + Sync,
    F: FnOnce(&dyn Container, &str) -> Result<T>,
{
    let id = dependency_id(section, config_key);
    if container.has(&id) {
        tracing::debug!(service = %id, "Using registered dependency");
        return Ok(container.get_typed::<T>(&id)?.as_ref().clone());
    }
    build(container, config_key)
}
