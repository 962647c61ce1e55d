use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;

/// Shared external store; exactly one connector is set, matching `engine`.
#[derive(Debug, Clone)]
pub struct DistributedTier {
    pub(crate) engine: CacheEngine,
    pub(crate) redis: Option<CacheConnectorRedis>,
    pub(crate) memcache: Option<CacheConnectorMemcache>,
}
