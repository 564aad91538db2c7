//! Cache Type Registry
//!
//! Maps type identifiers used in configuration (`class = "ArrayCache"`) to
//! zero-argument constructors. Uses the `linkme` crate for compile-time
//! registration so the factory never builds types from dynamic names.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Cache Type Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(CACHE_TYPES)]│
//! │                        static ENTRY: CacheTypeEntry = ...       │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static CACHE_TYPES: [Entry] = [..]   │
//! │                              ↓                                  │
//! │  3. Factory queries:   resolve_cache_type("ArrayCache")         │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a cache type (in cachewire-providers)
//!
//! ```ignore
//! use cachewire_application::ports::registry::{CACHE_TYPES, CacheTypeEntry};
//!
//! #[linkme::distributed_slice(CACHE_TYPES)]
//! static ARRAY_CACHE: CacheTypeEntry = CacheTypeEntry {
//!     name: "ArrayCache",
//!     description: "In-process namespaced cache",
//!     factory: || Ok(CacheInstance::provider(ArrayCache::new())),
//! };
//! ```

pub mod cache;

pub use cache::{
    CACHE_TYPES, CacheTypeEntry, is_registered, list_cache_types, resolve_cache_type,
};
