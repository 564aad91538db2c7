//! Tests for the moka item pool

use cachewire_domain::Error;
use cachewire_domain::ports::{CacheItem, CacheItemPool};
use cachewire_providers::MokaItemPool;
use std::time::Duration;

#[tokio::test]
async fn test_miss_then_hit() {
    let pool = MokaItemPool::new();

    let item = pool.get_item("user.1").await.unwrap();
    assert!(!item.is_hit());

    assert!(pool.save(item.set("{\"id\":1}")).await.unwrap());

    let item = pool.get_item("user.1").await.unwrap();
    assert!(item.is_hit());
    assert_eq!(item.get(), Some("{\"id\":1}"));
    assert!(pool.has_item("user.1").await.unwrap());
}

#[tokio::test]
async fn test_item_without_value_stores_null() {
    let pool = MokaItemPool::new();
    pool.save(CacheItem::miss("empty")).await.unwrap();

    let item = pool.get_item("empty").await.unwrap();
    assert!(item.is_hit());
    assert_eq!(item.get(), Some("null"));
}

#[tokio::test]
async fn test_expired_items_are_misses() {
    let pool = MokaItemPool::new();
    let item = CacheItem::miss("short")
        .set("1")
        .expires_after(Duration::from_millis(20));
    pool.save(item).await.unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(!pool.get_item("short").await.unwrap().is_hit());
    assert!(!pool.has_item("short").await.unwrap());
}

#[tokio::test]
async fn test_deferred_items_visible_before_commit() {
    let pool = MokaItemPool::new();
    pool.save_deferred(CacheItem::miss("a").set("1"))
        .await
        .unwrap();
    pool.save_deferred(CacheItem::miss("b").set("2"))
        .await
        .unwrap();

    assert_eq!(pool.deferred_len(), 2);
    assert!(pool.has_item("a").await.unwrap());

    assert!(pool.commit().await.unwrap());
    assert_eq!(pool.deferred_len(), 0);

    let items = pool.get_items(&["a", "b", "c"]).await.unwrap();
    assert_eq!(items[0].get(), Some("1"));
    assert_eq!(items[1].get(), Some("2"));
    assert!(!items[2].is_hit());
}

#[tokio::test]
async fn test_delete_and_clear() {
    let pool = MokaItemPool::new();
    pool.save(CacheItem::miss("a").set("1")).await.unwrap();
    pool.save(CacheItem::miss("b").set("2")).await.unwrap();
    pool.save_deferred(CacheItem::miss("c").set("3"))
        .await
        .unwrap();

    assert!(pool.delete_item("a").await.unwrap());
    assert!(!pool.has_item("a").await.unwrap());

    assert!(pool.clear().await.unwrap());
    assert!(!pool.has_item("b").await.unwrap());
    assert!(!pool.has_item("c").await.unwrap());
    assert_eq!(pool.deferred_len(), 0);
}

#[tokio::test]
async fn test_invalid_keys_rejected() {
    let pool = MokaItemPool::new();

    assert!(matches!(
        pool.get_item("bad:key").await,
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        pool.save(CacheItem::miss("bad/key").set("1")).await,
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        pool.delete_item("").await,
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_pool_is_not_namespaced() {
    let pool = MokaItemPool::with_capacity(10);
    assert_eq!(pool.capacity(), 10);
    assert_eq!(pool.pool_name(), "moka");
    assert!(pool.as_namespaced().is_none());
}

#[tokio::test]
async fn test_expired_deferred_item_hides_committed_value() {
    let pool = MokaItemPool::new();
    pool.save(CacheItem::miss("k").set("old")).await.unwrap();
    pool.save_deferred(
        CacheItem::miss("k")
            .set("new")
            .expires_after(Duration::from_millis(10)),
    )
    .await
    .unwrap();

    tokio::time::sleep(Duration::from_millis(30)).await;

    let item = pool.get_item("k").await.unwrap();
    assert!(!item.is_hit());
    assert_eq!(item.get(), None);
    assert!(!pool.has_item("k").await.unwrap());

    pool.commit().await.unwrap();
    assert!(!pool.get_item("k").await.unwrap().is_hit());
}

#[tokio::test]
async fn test_unbounded_item_lifetime_is_kept() {
    let pool = MokaItemPool::new();
    pool.save(CacheItem::miss("k").set("1").expires_after(Duration::MAX))
        .await
        .unwrap();

    let item = pool.get_item("k").await.unwrap();
    assert!(item.is_hit());
    assert_eq!(item.expires_at(), None);
}
