//! Domain Ports
//!
//! Contracts implemented by cache backends. Application code only ever sees
//! these traits; concrete types live in `cachewire-providers`.

pub mod providers;

pub use providers::{
    CacheItem, CacheItemPool, CacheProvider, CacheStats, NamespacedCache, validate_item_key,
};
