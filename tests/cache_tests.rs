mod common;

use std::sync::Arc;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use mentorship_gate::cache::enums::cache_tier_kind::CacheTierKind;
use mentorship_gate::cache::structs::cache_coordinator::CacheCoordinator;
use mentorship_gate::cache::structs::memory_tier::MemoryTier;
use mentorship_gate::cache::structs::ttl_policy::TtlPolicy;
use mentorship_gate::stats::structs::stats_atomics::StatsAtomics;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct MentorCard {
    id: u64,
    name: String,
    skills: Vec<String>,
}

fn memory_only(max_items: usize) -> CacheCoordinator {
    CacheCoordinator::new(
        Arc::new(MemoryTier::new(max_items)),
        Vec::new(),
        TtlPolicy::default(),
        "tag:",
        Arc::new(StatsAtomics::new()),
    )
}

#[tokio::test]
async fn test_tag_invalidation_removes_tagged_profile() {
    let dir = tempfile::tempdir().unwrap();
    let (layer, _) = common::create_test_layer(common::create_test_config(&dir)).await;

    layer.tag(&["user:42"], "user_profile_42", b"{\"name\":\"Ada\"}".to_vec(), Some(Duration::from_secs(1800))).await.unwrap();
    assert_eq!(layer.get("user_profile_42").await, Some(b"{\"name\":\"Ada\"}".to_vec()));

    assert_eq!(layer.invalidate_tag("user:42").await, 1);
    assert_eq!(layer.get("user_profile_42").await, None);
    assert_eq!(layer.invalidate_tag("user:42").await, 0);
}

#[tokio::test]
async fn test_memory_tier_evicts_first_inserted() {
    let cache = memory_only(2);
    cache.set("a", b"1".to_vec(), None).await.unwrap();
    cache.set("b", b"2".to_vec(), None).await.unwrap();
    cache.set("c", b"3".to_vec(), None).await.unwrap();

    assert_eq!(cache.get("a").await, None);
    assert_eq!(cache.get("b").await, Some(b"2".to_vec()));
    assert_eq!(cache.get("c").await, Some(b"3".to_vec()));
    assert_eq!(cache.memory().evictions(), 1);
}

#[tokio::test]
async fn test_reading_does_not_refresh_eviction_order() {
    let cache = memory_only(2);
    cache.set("a", b"1".to_vec(), None).await.unwrap();
    cache.set("b", b"2".to_vec(), None).await.unwrap();
    assert!(cache.get("a").await.is_some());
    cache.set("c", b"3".to_vec(), None).await.unwrap();
    assert_eq!(cache.get("a").await, None);
}

#[tokio::test]
async fn test_ttl_policy_prefixes_and_expiry() {
    let dir = tempfile::tempdir().unwrap();
    let (layer, _) = common::create_test_layer(common::create_test_config(&dir)).await;
    let policy = layer.cache.ttl_policy();

    assert_eq!(policy.resolve("user_profile_7", None), Duration::from_secs(3600));
    assert_eq!(policy.resolve("mentor_7", None), Duration::from_secs(1800));
    assert_eq!(policy.resolve("search_python", None), Duration::from_secs(300));
    assert_eq!(policy.resolve("unrelated", None), Duration::from_secs(900));
    assert_eq!(policy.resolve("mentor_7", Some(Duration::from_secs(5))), Duration::from_secs(5));

    layer.set("session_abc", b"s".to_vec(), Some(Duration::from_millis(20))).await.unwrap();
    assert!(layer.get("session_abc").await.is_some());
    tokio::time::sleep(Duration::from_millis(40)).await;
    assert_eq!(layer.get("session_abc").await, None);
}

#[tokio::test]
async fn test_durable_tier_survives_restart_and_promotes() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::create_test_config(&dir);

    {
        let (layer, _) = common::create_test_layer(config.clone()).await;
        assert_eq!(layer.cache.tier_kinds(), vec![CacheTierKind::memory, CacheTierKind::durable]);
        layer.set("skills_all", b"rust,go".to_vec(), None).await.unwrap();
    }

    let (layer, _) = common::create_test_layer(config).await;
    assert!(!layer.cache.memory().contains("skills_all"));
    assert_eq!(layer.get("skills_all").await, Some(b"rust,go".to_vec()));
    assert!(layer.cache.memory().contains("skills_all"));

    let stats = layer.stats();
    assert_eq!(stats.counters.cache_promotions, 1);
    assert_eq!(stats.counters.durable_hits, 1);
    assert_eq!(stats.counters.memory_misses, 1);
}

#[tokio::test]
async fn test_remember_calls_producer_once() {
    let dir = tempfile::tempdir().unwrap();
    let (layer, _) = common::create_test_layer(common::create_test_config(&dir)).await;

    let first: Result<Vec<u8>, String> = layer.remember("categories_top", None, || async { Ok(b"design".to_vec()) }).await;
    assert_eq!(first.unwrap(), b"design".to_vec());

    let second: Result<Vec<u8>, String> = layer.remember("categories_top", None, || async { Err(String::from("producer must not run")) }).await;
    assert_eq!(second.unwrap(), b"design".to_vec());
    assert_eq!(layer.stats().counters.cache_producer_calls, 1);
}

#[tokio::test]
async fn test_producer_error_is_not_cached() {
    let cache = memory_only(10);
    let failed: Result<Vec<u8>, String> = cache.remember("mentor_9", None, || async { Err(String::from("db down")) }).await;
    assert_eq!(failed.unwrap_err(), "db down");
    assert_eq!(cache.get("mentor_9").await, None);
}

#[tokio::test]
async fn test_json_helpers() {
    let cache = memory_only(10);
    let card = MentorCard { id: 3, name: String::from("Grace"), skills: vec![String::from("cobol")] };
    cache.set_json("mentor_3", &card, None).await.unwrap();
    assert_eq!(cache.get_json::<MentorCard>("mentor_3").await, Some(card));
    assert_eq!(cache.get_json::<MentorCard>("mentor_4").await, None);
}

#[tokio::test]
async fn test_invalidate_many_tags_and_clear() {
    let cache = memory_only(10);
    cache.tag(&["mentor:1"], "mentor_1", b"a".to_vec(), None).await.unwrap();
    cache.tag(&["mentor:2", "featured"], "mentor_2", b"b".to_vec(), None).await.unwrap();
    cache.set("static_footer", b"f".to_vec(), None).await.unwrap();

    assert_eq!(cache.invalidate_tags(&["mentor:1", "featured"]).await, 2);
    assert_eq!(cache.get("mentor_1").await, None);
    assert_eq!(cache.get("mentor_2").await, None);
    assert!(cache.get("static_footer").await.is_some());

    cache.clear().await;
    assert_eq!(cache.get("static_footer").await, None);
}
