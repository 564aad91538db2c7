//! Cache implementations for Cachewire
//!
//! Every type here registers itself in the cache type registry of
//! `cachewire-application`, so it can be named by `class` in configuration.
//! Binaries must link this crate (`extern crate cachewire_providers;`)
//! for the registrations to be present.

pub mod cache;
pub mod constants;

pub use cache::{ArrayCache, VoidCache};
#[cfg(feature = "cache-moka")]
pub use cache::MokaItemPool;
