//! Tests for the in-process namespaced cache

use cachewire_domain::ports::{CacheProvider, NamespacedCache};
use cachewire_providers::ArrayCache;
use std::time::Duration;

#[tokio::test]
async fn test_save_and_fetch() {
    let cache = ArrayCache::new();

    assert!(cache.save("user:1", "{\"id\":1}", None).await.unwrap());
    assert_eq!(
        cache.fetch("user:1").await.unwrap(),
        Some("{\"id\":1}".to_string())
    );
    assert!(cache.contains("user:1").await.unwrap());
    assert!(!cache.contains("user:2").await.unwrap());
}

#[tokio::test]
async fn test_delete() {
    let cache = ArrayCache::new();
    cache.save("k", "1", None).await.unwrap();

    assert!(cache.delete("k").await.unwrap());
    assert_eq!(cache.fetch("k").await.unwrap(), None);
    // Deleting a missing id still reports success
    assert!(cache.delete("k").await.unwrap());
}

#[tokio::test]
async fn test_lifetime_expires_entries() {
    let cache = ArrayCache::new();
    cache
        .save("short", "1", Some(Duration::from_millis(20)))
        .await
        .unwrap();
    cache.save("forever", "2", None).await.unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(cache.fetch("short").await.unwrap(), None);
    assert_eq!(cache.fetch("forever").await.unwrap(), Some("2".to_string()));
}

#[tokio::test]
async fn test_namespaces_isolate_entries() {
    let cache = ArrayCache::new();
    cache.set_namespace("a");
    cache.save("k", "from-a", None).await.unwrap();

    cache.set_namespace("b");
    assert_eq!(cache.fetch("k").await.unwrap(), None);
    cache.save("k", "from-b", None).await.unwrap();

    cache.set_namespace("a");
    assert_eq!(cache.fetch("k").await.unwrap(), Some("from-a".to_string()));
    assert_eq!(cache.namespace(), "a");
}

#[tokio::test]
async fn test_delete_all_only_clears_current_namespace() {
    let cache = ArrayCache::new();
    cache.set_namespace("a");
    cache.save("k", "from-a", None).await.unwrap();
    cache.set_namespace("b");
    cache.save("k", "from-b", None).await.unwrap();

    let before = cache.namespace_version();
    assert!(cache.delete_all().await.unwrap());
    assert_eq!(cache.namespace_version(), before + 1);
    assert_eq!(cache.fetch("k").await.unwrap(), None);

    cache.set_namespace("a");
    assert_eq!(cache.fetch("k").await.unwrap(), Some("from-a".to_string()));
}

#[tokio::test]
async fn test_delete_all_survives_namespace_switch() {
    let cache = ArrayCache::new();
    cache.set_namespace("a");
    cache.save("k", "old", None).await.unwrap();
    cache.delete_all().await.unwrap();

    cache.set_namespace("b");
    cache.set_namespace("a");
    assert_eq!(cache.fetch("k").await.unwrap(), None);
}

#[tokio::test]
async fn test_flush_all_clears_every_namespace() {
    let cache = ArrayCache::new();
    cache.set_namespace("a");
    cache.save("k", "1", None).await.unwrap();
    cache.set_namespace("b");
    cache.save("k", "2", None).await.unwrap();

    assert!(cache.flush_all().await.unwrap());
    assert_eq!(cache.stats().await.unwrap().entries, 0);
}

#[tokio::test]
async fn test_stats_count_hits_and_misses() {
    let cache = ArrayCache::new();
    cache.save("k", "1", None).await.unwrap();
    cache.fetch("k").await.unwrap();
    cache.fetch("missing").await.unwrap();

    let stats = cache.stats().await.unwrap();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.entries, 1);
}

#[test]
fn test_exposes_namespace_capability() {
    let cache = ArrayCache::new();
    assert!(cache.as_namespaced().is_some());
    assert_eq!(cache.provider_name(), "array");
    assert_eq!(cache.namespace(), "");
}

#[tokio::test]
async fn test_unbounded_lifetime_never_expires() {
    let cache = ArrayCache::new();

    assert!(cache.save("k", "1", Some(Duration::MAX)).await.unwrap());

    assert_eq!(cache.fetch("k").await.unwrap(), Some("1".to_string()));
    assert_eq!(cache.stats().await.unwrap().entries, 1);
}

#[tokio::test]
async fn test_delete_all_releases_entries() {
    let cache = ArrayCache::new();
    cache.set_namespace("orm");
    for i in 0..100 {
        cache.save(&format!("k{i}"), "1", None).await.unwrap();
    }

    cache.delete_all().await.unwrap();

    assert_eq!(cache.stats().await.unwrap().entries, 0);
}

#[tokio::test]
async fn test_delete_all_keeps_other_namespaces_and_new_saves() {
    let cache = ArrayCache::new();
    cache.set_namespace("a");
    cache.save("k", "1", None).await.unwrap();
    cache.set_namespace("b");
    cache.save("k", "2", None).await.unwrap();

    cache.delete_all().await.unwrap();
    cache.save("k", "3", None).await.unwrap();

    assert_eq!(cache.stats().await.unwrap().entries, 2);
    assert_eq!(cache.fetch("k").await.unwrap(), Some("3".to_string()));
    cache.set_namespace("a");
    assert_eq!(cache.fetch("k").await.unwrap(), Some("1".to_string()));
}
