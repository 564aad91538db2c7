//! Application ports

pub mod container;
pub mod registry;

pub use container::{Container, ContainerExt, Service};
