//! Dependency Injection
//!
//! ```text
//! AppConfig ──► init_app ──► ServiceContainer["config"] = tree
//!                                   │
//!               AppContext::cache(key)
//!                                   │
//!                     CacheFactory::retrieve ──► doctrine.cache.<key>
//! ```

pub mod bootstrap;
pub mod container;

pub use bootstrap::{AppContext, init_app};
pub use container::ServiceContainer;
