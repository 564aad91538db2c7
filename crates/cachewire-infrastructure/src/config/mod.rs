//! Application configuration
//!
//! Configuration is loaded by [`ConfigLoader`] and handed to the service
//! container as a plain `serde_json::Value` tree under the `config` id, which
//! is the shape the cache factory reads.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, DoctrineConfig, LoggingConfig};
