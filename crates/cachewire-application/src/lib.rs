//! Application Layer - Cachewire
//!
//! Turns configuration held by a service container into cache instances.
//!
//! ## Ports (Interfaces)
//!
//! - `ports::container`: the service container the factories read from
//! - `ports::registry`: compile-time registry of zero-argument cache types
//!
//! ## Factories
//!
//! - `factories::Factory`: shared plumbing (config retrieval, dependency shortcut)
//! - `factories::CacheFactory`: resolves `doctrine.cache.<key>` into a [`CacheInstance`]
//!
//! ## Dependencies
//!
//! This crate depends only on `cachewire-domain` and pure Rust libraries.
//!
//! [`CacheInstance`]: cachewire_domain::CacheInstance

pub mod factories;
pub mod ports;

pub use factories::{CacheFactory, Factory};
pub use ports::container::{Container, ContainerExt, Service};
