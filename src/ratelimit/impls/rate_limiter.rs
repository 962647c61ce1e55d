use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;
use log::{debug, info, warn};
use parking_lot::Mutex;
use crate::common::common::{current_time_millis, duration_to_millis, millis_to_datetime, ratio};
use crate::config::structs::rate_limiter_config::RateLimiterConfig;
use crate::ratelimit::errors::RateLimitError;
use crate::ratelimit::structs::local_rate_limit_store::LocalRateLimitStore;
use crate::ratelimit::structs::rate_limit_decision::RateLimitDecision;
use crate::ratelimit::structs::rate_limit_policy::RateLimitPolicy;
use crate::ratelimit::structs::rate_limiter::RateLimiter;
use crate::ratelimit::structs::rate_limiter_stats::RateLimiterStats;
use crate::ratelimit::structs::redis_rate_limit_store::RedisRateLimitStore;
use crate::ratelimit::traits::rate_limit_store::RateLimitStore;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl RateLimiter {
    pub fn new(store: Arc<dyn RateLimitStore>, policies: Vec<RateLimitPolicy>, stats: Arc<StatsAtomics>) -> RateLimiter {
        RateLimiter {
            store,
            policies: policies.into_iter().map(|policy| (policy.action.clone(), policy)).collect::<HashMap<_, _>>(),
            rejected_by_action: Mutex::new(BTreeMap::new()),
            stats,
        }
    }

    /// Picks the Redis store when a connection is supplied and allowed by config.
    pub fn from_config(config: &RateLimiterConfig, redis: Option<redis::aio::MultiplexedConnection>, stats: Arc<StatsAtomics>) -> RateLimiter {
        let store: Arc<dyn RateLimitStore> = match redis {
            Some(connection) if config.use_distributed => Arc::new(RedisRateLimitStore::new(connection, &config.key_prefix)),
            _ => Arc::new(LocalRateLimitStore::new()),
        };
        let policies = config.policies.iter().map(|policy| RateLimitPolicy {
            action: policy.action.clone(),
            limit: policy.limit,
            window: Duration::from_secs(policy.window),
        }).collect();
        let limiter = RateLimiter::new(store, policies, stats);
        info!("[RATELIMIT] Using {} store with {} policies", limiter.backend(), limiter.policies.len());
        limiter
    }

    pub fn backend(&self) -> &'static str {
        self.store.name()
    }

    pub fn policy(&self, action: &str) -> Option<&RateLimitPolicy> {
        self.policies.get(action)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn check(&self, identifier: &str, action: &str, limit: u64, window: Duration) -> Result<RateLimitDecision, RateLimitError> {
        if identifier.is_empty() || action.is_empty() {
            return Err(RateLimitError::InvalidArguments(String::from("identifier and action must not be empty")));
        }
        if limit == 0 {
            return Err(RateLimitError::InvalidArguments(String::from("limit must be at least 1")));
        }
        let window_ms = duration_to_millis(window);
        if window_ms <= 0 {
            return Err(RateLimitError::InvalidArguments(String::from("window must be at least one millisecond")));
        }

        self.stats.update_stats(StatsEvent::RateLimitChecks, 1);
        let now = current_time_millis();
        let outcome = match self.store.hit(identifier, action, now, window_ms, limit).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.stats.update_stats(StatsEvent::RateLimitErrors, 1);
                warn!("[RATELIMIT] {} store failed for {action}: {e}", self.backend());
                return Err(e);
            }
        };

        if outcome.allowed {
            self.stats.update_stats(StatsEvent::RateLimitAllowed, 1);
            return Ok(RateLimitDecision {
                allowed: true,
                limit,
                remaining: limit.saturating_sub(outcome.count),
                reset_at: millis_to_datetime(now.saturating_add(window_ms)),
            });
        }

        self.stats.update_stats(StatsEvent::RateLimitRejected, 1);
        *self.rejected_by_action.lock().entry(action.to_string()).or_insert(0) += 1;
        debug!("[RATELIMIT] Rejected {identifier} for {action} ({} in window)", outcome.count);
        Ok(RateLimitDecision {
            allowed: false,
            limit,
            remaining: 0,
            reset_at: millis_to_datetime(outcome.oldest_ms.unwrap_or(now).saturating_add(window_ms)),
        })
    }

    /// Checks against the configured policy for `action`.
    pub async fn check_policy(&self, identifier: &str, action: &str) -> Result<RateLimitDecision, RateLimitError> {
        let Some(policy) = self.policies.get(action) else {
            return Err(RateLimitError::UnknownPolicy(action.to_string()));
        };
        self.check(identifier, action, policy.limit, policy.window).await
    }

    pub async fn reset(&self, identifier: &str, action: &str) -> Result<(), RateLimitError> {
        self.store.reset(identifier, action).await
    }

    pub async fn purge_idle(&self) -> Result<usize, RateLimitError> {
        let purged = self.store.purge_idle(current_time_millis()).await?;
        if purged > 0 {
            debug!("[RATELIMIT] Purged {purged} idle windows");
        }
        Ok(purged)
    }

    pub fn stats(&self) -> RateLimiterStats {
        let checks = self.stats.get_stat(StatsEvent::RateLimitChecks);
        let rejected = self.stats.get_stat(StatsEvent::RateLimitRejected);
        RateLimiterStats {
            backend: self.backend().to_string(),
            checks,
            allowed: self.stats.get_stat(StatsEvent::RateLimitAllowed),
            rejected,
            errors: self.stats.get_stat(StatsEvent::RateLimitErrors),
            rejection_ratio: ratio(rejected, checks),
            rejected_by_action: self.rejected_by_action.lock().clone(),
        }
    }
}
