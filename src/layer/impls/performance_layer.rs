use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use log::{info, warn};
use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_coordinator::CacheCoordinator;
use crate::cache::structs::distributed_tier::DistributedTier;
use crate::common::common::current_time_millis;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;
use crate::layer::structs::performance_layer::PerformanceLayer;
use crate::pool::errors::PoolError;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::pool::structs::pool_settings::PoolSettings;
use crate::pool::structs::pooled_connection::PooledConnection;
use crate::pool::structs::sqlx_connection_factory::SqlxConnectionFactory;
use crate::pool::traits::connection_factory::ConnectionFactory;
use crate::ratelimit::errors::RateLimitError;
use crate::ratelimit::structs::rate_limit_decision::RateLimitDecision;
use crate::ratelimit::structs::rate_limiter::RateLimiter;
use crate::stats::structs::service_stats::ServiceStats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl PerformanceLayer<SqlxConnectionFactory> {
    /// Builds the layer with an sqlx-backed pool as described by `config.pool`.
    pub async fn new(config: Arc<Configuration>) -> Result<Self, CustomError> {
        let factory = SqlxConnectionFactory::from_config(&config.pool)
            .map_err(|e| CustomError::new(&format!("[POOL] {e}")))?;
        PerformanceLayer::with_factory(config, factory).await
    }
}

impl<F: ConnectionFactory> PerformanceLayer<F> {
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn with_factory(config: Arc<Configuration>, factory: F) -> Result<Self, CustomError> {
        let stats = Arc::new(StatsAtomics::new());

        let distributed = if config.cache.distributed.enabled {
            match DistributedTier::connect(&config.cache.distributed).await {
                Ok(tier) => Some(Arc::new(tier)),
                Err(e) => {
                    warn!("[CACHE] Distributed tier unavailable, continuing without it: {e}");
                    None
                }
            }
        } else {
            None
        };

        let cache = CacheCoordinator::from_config(&config.cache, distributed.clone(), stats.clone())
            .await
            .map_err(|e| CustomError::new(&format!("[CACHE] {e}")))?;

        if config.rate_limiter.use_distributed
            && distributed.as_ref().is_some_and(|tier| tier.engine() == CacheEngine::memcache) {
            info!("[RATELIMIT] Memcache cannot run the sliding-window script, falling back to the local store");
        }
        let redis = distributed.as_ref().and_then(|tier| tier.redis_connection());
        let rate_limiter = RateLimiter::from_config(&config.rate_limiter, redis, stats.clone());

        let pool = ConnectionPool::new(factory, PoolSettings::from_config(&config.pool), stats.clone());
        if let Err(e) = pool.warm_up().await {
            warn!("[POOL] Warm-up failed, connections will be opened on demand: {e}");
        }

        Ok(PerformanceLayer::from_parts(config, cache, rate_limiter, pool, stats))
    }

    /// The components must share `stats` for `stats()` to be coherent.
    pub fn from_parts(config: Arc<Configuration>, cache: CacheCoordinator, rate_limiter: RateLimiter, pool: ConnectionPool<F>, stats: Arc<StatsAtomics>) -> Self {
        PerformanceLayer { config, cache, rate_limiter, pool, stats }
    }

    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.cache.get(key).await
    }

    pub async fn set(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<(), CacheError> {
        self.cache.set(key, value, ttl).await
    }

    pub async fn delete(&self, key: &str) -> bool {
        self.cache.delete(key).await
    }

    pub async fn remember<P, Fut, E>(&self, key: &str, ttl: Option<Duration>, producer: P) -> Result<Vec<u8>, E>
    where
        P: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<u8>, E>>,
    {
        self.cache.remember(key, ttl, producer).await
    }

    pub async fn tag(&self, tags: &[&str], key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<(), CacheError> {
        self.cache.tag(tags, key, value, ttl).await
    }

    pub async fn invalidate_tag(&self, tag: &str) -> usize {
        self.cache.invalidate_tag(tag).await
    }

    pub async fn invalidate_tags(&self, tags: &[&str]) -> usize {
        self.cache.invalidate_tags(tags).await
    }

    pub async fn check_rate_limit(&self, identifier: &str, action: &str, limit: u64, window: Duration) -> Result<RateLimitDecision, RateLimitError> {
        self.rate_limiter.check(identifier, action, limit, window).await
    }

    pub async fn check_policy(&self, identifier: &str, action: &str) -> Result<RateLimitDecision, RateLimitError> {
        self.rate_limiter.check_policy(identifier, action).await
    }

    /// `None` waits for the configured `acquire_timeout`.
    pub async fn acquire_connection(&self, timeout: Option<Duration>) -> Result<PooledConnection<F>, PoolError> {
        let timeout = timeout.unwrap_or(self.pool.settings().acquire_timeout);
        self.pool.acquire(timeout).await
    }

    pub fn release_connection(&self, handle: PooledConnection<F>) {
        self.pool.release(handle);
    }

    pub async fn discard_connection(&self, handle: PooledConnection<F>) {
        self.pool.discard(handle).await;
    }

    pub fn stats(&self) -> ServiceStats {
        let counters = self.stats.get_stats();
        ServiceStats {
            uptime_seconds: (current_time_millis() / 1000 - counters.started).max(0),
            counters,
            cache: self.cache.stats(),
            rate_limiter: self.rate_limiter.stats(),
            pool: self.pool.stats(),
        }
    }

    /// One pass of every periodic task: reaping, expiry sweep and idle window cleanup.
    pub async fn run_maintenance(&self) {
        self.pool.reap_idle().await;
        self.cache.purge_expired().await;
        if let Err(e) = self.rate_limiter.purge_idle().await {
            warn!("[RATELIMIT] Cleanup failed: {e}");
        }
    }

    /// Drains the pool and sweeps expired cache entries. Returns the number of
    /// pool handles still checked out when the drain timeout elapsed.
    pub async fn shutdown(&self) -> usize {
        info!("[SHUTDOWN] Draining connection pool...");
        let outstanding = self.pool.close(Duration::from_secs(self.config.pool.drain_timeout)).await;
        let purged = self.cache.purge_expired().await;
        info!("[SHUTDOWN] Cache sweep removed {purged} expired entries");
        outstanding
    }
}
