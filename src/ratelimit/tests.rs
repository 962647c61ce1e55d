#[cfg(test)]
mod ratelimit_tests {
    use std::sync::Arc;
    use std::time::Duration;
    use chrono::{TimeZone, Utc};
    use crate::config::structs::rate_limiter_config::RateLimiterConfig;
    use crate::ratelimit::errors::RateLimitError;
    use crate::ratelimit::structs::local_rate_limit_store::LocalRateLimitStore;
    use crate::ratelimit::structs::rate_limit_decision::RateLimitDecision;
    use crate::ratelimit::structs::rate_limit_policy::RateLimitPolicy;
    use crate::ratelimit::structs::rate_limiter::RateLimiter;
    use crate::ratelimit::structs::rate_window_record::RateWindowRecord;
    use crate::ratelimit::traits::rate_limit_store::RateLimitStore;
    use crate::stats::structs::stats_atomics::StatsAtomics;

    fn local_limiter() -> RateLimiter {
        RateLimiter::new(
            Arc::new(LocalRateLimitStore::new()),
            vec![RateLimitPolicy { action: "login".to_string(), limit: 3, window: Duration::from_secs(60) }],
            Arc::new(StatsAtomics::new()),
        )
    }

    #[test]
    fn test_record_prunes_outside_window() {
        let mut record = RateWindowRecord::new("ip", "login", 1000);
        record.record(0);
        record.record(500);
        record.record(1200);
        record.prune(1500);
        assert_eq!(record.count(), 2);
        assert_eq!(record.oldest(), Some(500));
        assert!(!record.is_idle(1500));
        assert!(record.is_idle(2300));
    }

    #[test]
    fn test_record_stays_ordered_when_clock_steps_back() {
        let mut record = RateWindowRecord::new("ip", "login", 1000);
        record.record(900);
        record.record(100);
        assert_eq!(record.events.iter().copied().collect::<Vec<_>>(), vec![900, 900]);
    }

    #[tokio::test]
    async fn test_local_store_window_slides() {
        let store = LocalRateLimitStore::new();
        assert!(store.hit("ip", "login", 0, 1000, 2).await.unwrap().allowed);
        assert!(store.hit("ip", "login", 100, 1000, 2).await.unwrap().allowed);
        let rejected = store.hit("ip", "login", 200, 1000, 2).await.unwrap();
        assert!(!rejected.allowed);
        assert_eq!(rejected.count, 2);
        assert_eq!(rejected.oldest_ms, Some(0));
        let readmitted = store.hit("ip", "login", 1001, 1000, 2).await.unwrap();
        assert!(readmitted.allowed);
        assert_eq!(readmitted.count, 2);
    }

    #[tokio::test]
    async fn test_rejected_hit_is_not_recorded() {
        let store = LocalRateLimitStore::new();
        store.hit("ip", "a", 0, 1000, 1).await.unwrap();
        for now in [10, 20, 30] {
            assert!(!store.hit("ip", "a", now, 1000, 1).await.unwrap().allowed);
        }
        assert!(store.hit("ip", "a", 1001, 1000, 1).await.unwrap().allowed);
    }

    #[tokio::test]
    async fn test_local_store_purge_idle() {
        let store = LocalRateLimitStore::new();
        store.hit("a", "login", 0, 1000, 5).await.unwrap();
        store.hit("b", "login", 5000, 1000, 5).await.unwrap();
        assert_eq!(store.purge_idle(5500).await.unwrap(), 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_remaining_counts_down() {
        let limiter = local_limiter();
        let mut remaining = Vec::new();
        for _ in 0..3 {
            let decision = limiter.check("10.0.0.1", "login", 3, Duration::from_secs(60)).await.unwrap();
            assert!(decision.allowed);
            remaining.push(decision.remaining);
        }
        assert_eq!(remaining, vec![2, 1, 0]);
        let denied = limiter.check("10.0.0.1", "login", 3, Duration::from_secs(60)).await.unwrap();
        assert!(!denied.allowed);
        assert_eq!(denied.remaining, 0);
        assert!(denied.reset_at > Utc::now());
    }

    #[tokio::test]
    async fn test_identifiers_and_actions_are_independent() {
        let limiter = local_limiter();
        limiter.check("a", "login", 1, Duration::from_secs(60)).await.unwrap();
        assert!(limiter.check("b", "login", 1, Duration::from_secs(60)).await.unwrap().allowed);
        assert!(limiter.check("a", "register", 1, Duration::from_secs(60)).await.unwrap().allowed);
        assert!(!limiter.check("a", "login", 1, Duration::from_secs(60)).await.unwrap().allowed);
    }

    #[tokio::test]
    async fn test_invalid_arguments() {
        let limiter = local_limiter();
        assert!(matches!(limiter.check("", "login", 1, Duration::from_secs(1)).await, Err(RateLimitError::InvalidArguments(_))));
        assert!(matches!(limiter.check("a", "login", 0, Duration::from_secs(1)).await, Err(RateLimitError::InvalidArguments(_))));
        assert!(matches!(limiter.check("a", "login", 1, Duration::ZERO).await, Err(RateLimitError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_oversized_window_clamps_reset() {
        let limiter = RateLimiter::new(
            Arc::new(LocalRateLimitStore::new()),
            vec![RateLimitPolicy { action: "login".to_string(), limit: 1, window: Duration::from_secs(u64::MAX) }],
            Arc::new(StatsAtomics::new()),
        );
        let allowed = limiter.check_policy("ip", "login").await.unwrap();
        assert!(allowed.allowed);
        assert!(allowed.reset_at > Utc::now());

        let denied = limiter.check("ip", "login", 1, Duration::MAX).await.unwrap();
        assert!(!denied.allowed);
        assert!(denied.reset_at > Utc::now());
        assert!(denied.retry_after_secs() > 1);
        assert!(denied.headers().iter().any(|(name, _)| *name == "Retry-After"));
    }

    #[tokio::test]
    async fn test_named_policies() {
        let limiter = local_limiter();
        for _ in 0..3 {
            assert!(limiter.check_policy("user-1", "login").await.unwrap().allowed);
        }
        assert!(!limiter.check_policy("user-1", "login").await.unwrap().allowed);
        limiter.reset("user-1", "login").await.unwrap();
        assert!(limiter.check_policy("user-1", "login").await.unwrap().allowed);
        assert!(matches!(limiter.check_policy("user-1", "teleport").await, Err(RateLimitError::UnknownPolicy(_))));
    }

    #[tokio::test]
    async fn test_stats_track_rejections_per_action() {
        let limiter = local_limiter();
        for _ in 0..4 {
            limiter.check_policy("x", "login").await.unwrap();
        }
        let stats = limiter.stats();
        assert_eq!(stats.backend, "local");
        assert_eq!(stats.checks, 4);
        assert_eq!(stats.allowed, 3);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.rejected_by_action.get("login"), Some(&1));
        assert!((stats.rejection_ratio - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_config_without_redis_uses_local_store() {
        let limiter = RateLimiter::from_config(&RateLimiterConfig::default(), None, Arc::new(StatsAtomics::new()));
        assert_eq!(limiter.backend(), "local");
        assert_eq!(limiter.policy("login").map(|policy| policy.limit), Some(5));
        assert_eq!(limiter.policy("api").map(|policy| policy.window), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_decision_headers() {
        let reset_at = Utc.timestamp_opt(1_700_000_060, 0).unwrap();
        let allowed = RateLimitDecision { allowed: true, limit: 100, remaining: 42, reset_at };
        assert_eq!(allowed.headers(), vec![
            ("X-RateLimit-Limit", "100".to_string()),
            ("X-RateLimit-Remaining", "42".to_string()),
            ("X-RateLimit-Reset", "1700000060".to_string()),
        ]);

        let denied = RateLimitDecision { allowed: false, remaining: 0, ..allowed };
        assert!(denied.headers().iter().any(|(name, _)| *name == "Retry-After"));
        let now = Utc.timestamp_millis_opt(1_700_000_000_500).unwrap();
        assert_eq!(denied.retry_after_secs_at(now), 60);
        assert_eq!(denied.retry_after_secs_at(reset_at), 1);
    }
}
