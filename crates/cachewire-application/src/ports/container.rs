//! Service Container Port
//!
//! Minimal lookup contract the factories need from a dependency-injection
//! container: an existence check and a by-id lookup. Services are stored
//! type-erased and downcast by the caller.
//!
//! ## Example
//!
//! ```ignore
//! use cachewire_application::{Container, ContainerExt};
//!
//! if container.has("config") {
//!     let tree = container.get_typed::<serde_json::Value>("config")?;
//! }
//! ```

use cachewire_domain::error::{Error, Result};
use std::any::{Any, type_name};
use std::sync::Arc;

/// A type-erased service held by a container
pub type Service = Arc<dyn Any + Send + Sync>;

/// Service lookup abstraction
pub trait Container: Send + Sync {
    /// Whether a service is registered under `id`
    fn has(&self, id: &str) -> bool;

    /// The service registered under `id`
    ///
    /// Fails with [`Error::NotFound`] when nothing is registered.
    fn get(&self, id: &str) -> Result<Service>;
}

/// Typed access on top of [`Container`]
pub trait ContainerExt: Container {
    /// The service under `id`, downcast to `T`
    ///
    /// Fails with [`Error::UnresolvableType`] when the service is not a `T`.
    fn get_typed<T: Any + Send + Sync>(&self, id: &str) -> Result<Arc<T>> {
        self.get(id)?.downcast::<T>().map_err(|_| {
            Error::unresolvable_type(id, format!("service is not a {}", type_name::<T>()))
        })
    }
}

impl<C: Container + ?Sized> ContainerExt for C {}
