//! Configuration types

use crate::constants::DEFAULT_LOG_LEVEL;
use cachewire_domain::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}

/// The `doctrine` configuration node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctrineConfig {
    /// Named cache configurations (`doctrine.cache.<key>`)
    #[serde(default)]
    pub cache: BTreeMap<String, Value>,

    /// Other factory sections, kept as-is
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Factory configuration
    #[serde(default)]
    pub doctrine: DoctrineConfig,

    /// Sections this crate does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppConfig {
    /// Names of the configured caches, sorted
    pub fn cache_keys(&self) -> Vec<&str> {
        self.doctrine.cache.keys().map(String::as_str).collect()
    }

    /// The configuration as the tree registered in the container
    pub fn to_tree(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
