//! # Cachewire
//!
//! Configuration-driven cache factory. A cache is described under
//! `doctrine.cache.<key>` in the configuration tree and built on demand:
//!
//! ```toml
//! [doctrine.cache.orm_default]
//! class = "ArrayCache"
//! namespace = "orm"
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use cachewire::infrastructure::{ConfigLoader, init_app};
//!
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let cache = context.cache("orm_default")?;
//! assert_eq!(cache.as_namespaced().unwrap().namespace(), "orm");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Cache ports, value objects and errors
//! - `application` - Container port, cache type registry and the cache factory
//! - `providers` - Built-in cache implementations
//! - `infrastructure` - Configuration, logging and the service container

/// Domain layer - cache ports, value objects and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cachewire_domain::*;
}

/// Application layer - container port, registry and factories
pub mod application {
    pub use cachewire_application::*;
}

/// Built-in cache implementations
pub mod providers {
    pub use cachewire_providers::*;
}

/// Infrastructure layer - DI, config, and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use cachewire_infrastructure::*;
}

pub mod cli;

// Re-export commonly used types at the crate root
pub use application::{CacheFactory, Container, Factory};
pub use domain::{CacheConfig, CacheInstance, Error, Result};
pub use infrastructure::{AppContext, ConfigLoader, init_app};
