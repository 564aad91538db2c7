//! Tests for configuration retrieval helpers

use crate::test_utils::MockContainer;
use cachewire_application::factories::{dependency_id, retrieve_config};
use cachewire_domain::Error;
use serde_json::{Map, Value, json};

fn defaults() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("class".to_string(), json!("ArrayCache"));
    map.insert("namespace".to_string(), json!("default-ns"));
    map
}

#[test]
fn test_missing_config_service_yields_defaults() {
    let container = MockContainer::new();
    let config = retrieve_config(&container, "foo", "cache", defaults()).unwrap();
    assert_eq!(config, defaults());
}

#[test]
fn test_missing_node_yields_defaults() {
    let container = MockContainer::with_config(json!({ "doctrine": {} }));
    let config = retrieve_config(&container, "foo", "cache", Map::new()).unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_non_mapping_parents_count_as_missing() {
    let container = MockContainer::with_config(json!({ "doctrine": "not-a-map" }));
    let config = retrieve_config(&container, "foo", "cache", Map::new()).unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_user_keys_override_defaults() {
    let container = MockContainer::with_config(json!({
        "doctrine": { "cache": { "foo": { "namespace": "user-ns" } } }
    }));

    let config = retrieve_config(&container, "foo", "cache", defaults()).unwrap();

    assert_eq!(config.get("class"), Some(&json!("ArrayCache")));
    assert_eq!(config.get("namespace"), Some(&json!("user-ns")));
}

#[test]
fn test_non_mapping_leaf_is_configuration_error() {
    let container = MockContainer::with_config(json!({
        "doctrine": { "cache": { "foo": "ArrayCache" } }
    }));

    let err = retrieve_config(&container, "foo", "cache", Map::new()).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_config_service_of_wrong_type_is_configuration_error() {
    let container = MockContainer::new().with_service("config", "not a tree".to_string());

    let err = retrieve_config(&container, "foo", "cache", Map::new()).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_dependency_id() {
    assert_eq!(dependency_id("cache", "orm_default"), "doctrine.cache.orm_default");
}
