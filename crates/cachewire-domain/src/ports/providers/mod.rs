//! Cache provider ports
//!
//! | Port | Style | Description |
//! |------|-------|-------------|
//! | [`CacheProvider`] | Legacy | Id/data store with lifetimes, optionally namespaced |
//! | [`CacheItemPool`] | Pooled | Item-oriented store with deferred saves |
//! | [`NamespacedCache`] | Capability | Optional key-prefix support |

pub mod cache;
pub mod pool;

pub use cache::{CacheProvider, CacheStats, NamespacedCache};
pub use pool::{CacheItem, CacheItemPool, validate_item_key};
