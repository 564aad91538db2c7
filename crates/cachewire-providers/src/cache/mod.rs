//! Cache Implementations
//!
//! ## Available Types
//!
//! | Type | Port | Namespaced | Description |
//! |------|------|------------|-------------|
//! | [`ArrayCache`] | `CacheProvider` | yes | In-process store with lifetimes |
//! | [`VoidCache`] | `CacheProvider` | no | Stores nothing |
//! | [`MokaItemPool`] | `CacheItemPool` | no | Moka-backed pooled store |

pub mod array;
#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod void;

// Re-export for convenience
pub use array::ArrayCache;
#[cfg(feature = "cache-moka")]
pub use moka::MokaItemPool;
pub use void::VoidCache;
