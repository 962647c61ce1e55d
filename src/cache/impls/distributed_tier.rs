use async_trait::async_trait;
use log::{info, warn};
use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::enums::cache_tier_kind::CacheTierKind;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::distributed_tier::DistributedTier;
use crate::cache::enums::compression_algorithm::CompressionAlgorithm;
use crate::cache::traits::cache_tier::CacheTier;
use crate::common::common::current_time_millis;
use crate::config::structs::distributed_tier_config::DistributedTierConfig;
use crate::utils::sentry_tracing::trace_async;

impl DistributedTier {
    #[tracing::instrument(level = "debug", skip(config), fields(engine = %config.engine))]
    pub async fn connect(config: &DistributedTierConfig) -> Result<DistributedTier, CacheError> {
        let url = if config.address.contains("://") {
            config.address.clone()
        } else {
            format!("{}{}", config.engine.url_scheme(), config.address)
        };
        let tier = trace_async("distributed_connect", "cache.connect", async {
            match config.engine {
                CacheEngine::redis => Ok::<_, CacheError>(DistributedTier {
                    engine: config.engine,
                    redis: Some(CacheConnectorRedis::connect(&url, &config.prefix).await?),
                    memcache: None,
                }),
                CacheEngine::memcache => Ok(DistributedTier {
                    engine: config.engine,
                    redis: None,
                    memcache: Some(CacheConnectorMemcache::connect(&url, &config.prefix).await?),
                }),
            }
        }).await?;
        trace_async("distributed_ping", "cache.ping", tier.ping()).await?;
        info!("[{}] Connected to {}", config.engine.to_string().to_uppercase(), config.address);
        Ok(tier)
    }

    pub fn engine(&self) -> CacheEngine {
        self.engine
    }

    /// Connection for callers that run their own commands, such as the rate limiter.
    pub fn redis_connection(&self) -> Option<redis::aio::MultiplexedConnection> {
        self.redis.as_ref().map(|redis| redis.connection())
    }

    fn unavailable(&self) -> CacheError {
        CacheError::TierUnavailable(format!("{} connector missing", self.engine))
    }
}

#[async_trait]
impl CacheTier for DistributedTier {
    fn kind(&self) -> CacheTierKind {
        CacheTierKind::distributed
    }

    async fn try_get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        let data = match (&self.redis, &self.memcache) {
            (Some(redis), _) => redis.get(key).await?,
            (None, Some(memcache)) => memcache.get(key).await?,
            (None, None) => return Err(self.unavailable()),
        };
        let Some(data) = data else { return Ok(None) };
        let entry = CacheEntry::decode(&data)?;
        if entry.key != key {
            warn!("[{}] Stored key {} does not match {key}", self.engine.to_string().to_uppercase(), entry.key);
            return Ok(None);
        }
        Ok(Some(entry))
    }

    async fn put(&self, entry: &CacheEntry) -> Result<(), CacheError> {
        let ttl = entry.remaining_millis(current_time_millis());
        if ttl == 0 {
            return Ok(());
        }
        let frame = entry.encode(CompressionAlgorithm::none)?;
        match (&self.redis, &self.memcache) {
            (Some(redis), _) => redis.set(&entry.key, &frame, ttl).await,
            (None, Some(memcache)) => memcache.set(&entry.key, &frame, ttl).await,
            (None, None) => Err(self.unavailable()),
        }
    }

    async fn remove(&self, key: &str) -> Result<bool, CacheError> {
        match (&self.redis, &self.memcache) {
            (Some(redis), _) => redis.delete(key).await,
            (None, Some(memcache)) => memcache.delete(key).await,
            (None, None) => Err(self.unavailable()),
        }
    }

    async fn clear(&self) -> Result<(), CacheError> {
        match (&self.redis, &self.memcache) {
            (Some(redis), _) => redis.delete_prefixed().await.map(|_| ()),
            (None, Some(memcache)) => memcache.flush().await,
            (None, None) => Err(self.unavailable()),
        }
    }

    async fn ping(&self) -> Result<(), CacheError> {
        match (&self.redis, &self.memcache) {
            (Some(redis), _) => redis.ping().await,
            (None, Some(memcache)) => memcache.ping().await,
            (None, None) => Err(self.unavailable()),
        }
    }
}
