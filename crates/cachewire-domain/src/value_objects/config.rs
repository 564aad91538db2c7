//! Cache configuration value object

use crate::constants::{CLASS_KEY, NAMESPACE_KEY};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Configuration describing how to build one named cache
///
/// Only `class` and `namespace` are interpreted. Any other key is kept in
/// [`CacheConfig::extra`] untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Container service id or registered cache type name
    pub class: String,
    /// Namespace applied to caches that support it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Keys not interpreted by the cache factory
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CacheConfig {
    /// Create a config for the given class
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            namespace: None,
            extra: Map::new(),
        }
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Parse a raw configuration mapping
    ///
    /// The `class` key is checked before anything else, so a mapping
    /// without it always fails with [`Error::MissingConfigKey`].
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let class = match map.get(CLASS_KEY) {
            None => return Err(Error::missing_config_key(CLASS_KEY)),
            Some(Value::String(class)) => class.clone(),
            Some(other) => {
                return Err(Error::configuration(format!(
                    "\"{CLASS_KEY}\" config key must be a string, got {other}"
                )));
            }
        };

        let namespace = match map.get(NAMESPACE_KEY) {
            None => None,
            Some(Value::String(namespace)) => Some(namespace.clone()),
            Some(other) => {
                return Err(Error::configuration(format!(
                    "\"{NAMESPACE_KEY}\" config key must be a string, got {other}"
                )));
            }
        };

        let extra = map
            .iter()
            .filter(|(key, _)| key.as_str() != CLASS_KEY && key.as_str() != NAMESPACE_KEY)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            class,
            namespace,
            extra,
        })
    }
}
