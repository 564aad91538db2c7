//! Domain Layer - Cachewire
//!
//! Core types shared by every other crate in the workspace:
//!
//! - [`error`]: the workspace error type and `Result` alias
//! - [`ports`]: cache ports (`CacheProvider`, `CacheItemPool`) and the
//!   optional namespace capability
//! - [`value_objects`]: the parsed cache configuration and the resolved
//!   cache instance
//!
//! This crate has no knowledge of concrete cache backends or of how
//! configuration is loaded.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{CacheConfig, CacheInstance};
