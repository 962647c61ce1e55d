mod common;

use std::sync::Arc;
use std::time::Duration;
use mentorship_gate::ratelimit::errors::RateLimitError;
use mentorship_gate::ratelimit::structs::local_rate_limit_store::LocalRateLimitStore;
use mentorship_gate::ratelimit::structs::rate_limit_policy::RateLimitPolicy;
use mentorship_gate::ratelimit::structs::rate_limiter::RateLimiter;
use mentorship_gate::stats::structs::stats_atomics::StatsAtomics;

fn limiter() -> RateLimiter {
    RateLimiter::new(
        Arc::new(LocalRateLimitStore::new()),
        vec![RateLimitPolicy { action: String::from("message"), limit: 3, window: Duration::from_millis(100) }],
        Arc::new(StatsAtomics::new()),
    )
}

#[tokio::test]
async fn test_hundred_logins_then_rejection() {
    let limiter = limiter();
    let window = Duration::from_secs(3600);

    let mut previous = None;
    for expected in (0..100u64).rev() {
        let decision = limiter.check("ip:203.0.113.5", "login", 100, window).await.unwrap();
        assert!(decision.allowed);
        assert_eq!(decision.remaining, expected);
        if let Some(previous) = previous {
            assert!(decision.remaining < previous);
        }
        previous = Some(decision.remaining);
    }

    let denied = limiter.check("ip:203.0.113.5", "login", 100, window).await.unwrap();
    assert!(!denied.allowed);
    assert_eq!(denied.remaining, 0);
    assert!(denied.retry_after_secs() >= 1);
    assert!(denied.headers().iter().any(|(name, _)| *name == "Retry-After"));

    let stats = limiter.stats();
    assert_eq!(stats.checks, 101);
    assert_eq!(stats.allowed, 100);
    assert_eq!(stats.rejected, 1);
    assert_eq!(stats.rejected_by_action.get("login"), Some(&1));
}

#[tokio::test]
async fn test_identifiers_and_actions_are_independent() {
    let limiter = limiter();
    let window = Duration::from_secs(60);
    assert!(limiter.check("user:1", "booking", 1, window).await.unwrap().allowed);
    assert!(!limiter.check("user:1", "booking", 1, window).await.unwrap().allowed);
    assert!(limiter.check("user:2", "booking", 1, window).await.unwrap().allowed);
    assert!(limiter.check("user:1", "upload", 1, window).await.unwrap().allowed);
}

#[tokio::test]
async fn test_window_slides() {
    let limiter = limiter();
    for _ in 0..3 {
        assert!(limiter.check_policy("user:9", "message").await.unwrap().allowed);
    }
    assert!(!limiter.check_policy("user:9", "message").await.unwrap().allowed);
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(limiter.check_policy("user:9", "message").await.unwrap().allowed);
}

#[tokio::test]
async fn test_reset_and_unknown_policy() {
    let limiter = limiter();
    let window = Duration::from_secs(60);
    assert!(limiter.check("ip:1", "register", 1, window).await.unwrap().allowed);
    assert!(!limiter.check("ip:1", "register", 1, window).await.unwrap().allowed);
    limiter.reset("ip:1", "register").await.unwrap();
    assert!(limiter.check("ip:1", "register", 1, window).await.unwrap().allowed);

    assert!(matches!(limiter.check_policy("ip:1", "nope").await, Err(RateLimitError::UnknownPolicy(_))));
    assert!(matches!(limiter.check("", "register", 1, window).await, Err(RateLimitError::InvalidArguments(_))));
    assert!(matches!(limiter.check("ip:1", "register", 0, window).await, Err(RateLimitError::InvalidArguments(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_checks_never_exceed_limit() {
    let limiter = Arc::new(limiter());
    let mut tasks = Vec::new();
    for _ in 0..50 {
        let limiter = limiter.clone();
        tasks.push(tokio::spawn(async move {
            limiter.check("ip:198.51.100.1", "password_reset", 10, Duration::from_secs(60)).await.unwrap().allowed
        }));
    }
    let mut allowed = 0;
    for task in tasks {
        if task.await.unwrap() {
            allowed += 1;
        }
    }
    assert_eq!(allowed, 10);
}

#[tokio::test]
async fn test_layer_uses_configured_policies() {
    let dir = tempfile::tempdir().unwrap();
    let (layer, _) = common::create_test_layer(common::create_test_config(&dir)).await;
    assert_eq!(layer.rate_limiter.backend(), "local");

    for _ in 0..5 {
        assert!(layer.check_policy("ip:192.0.2.1", "login").await.unwrap().allowed);
    }
    let denied = layer.check_policy("ip:192.0.2.1", "login").await.unwrap();
    assert!(!denied.allowed);
    assert_eq!(denied.limit, 5);
}
