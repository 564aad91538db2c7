//! Configuration Tests
//!
//! Tests for configuration loading, validation, and persistence.

mod loader_test;
