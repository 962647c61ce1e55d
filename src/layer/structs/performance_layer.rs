use std::sync::Arc;
use crate::cache::structs::cache_coordinator::CacheCoordinator;
use crate::config::structs::configuration::Configuration;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::pool::structs::sqlx_connection_factory::SqlxConnectionFactory;
use crate::pool::traits::connection_factory::ConnectionFactory;
use crate::ratelimit::structs::rate_limiter::RateLimiter;
use crate::stats::structs::stats_atomics::StatsAtomics;

pub struct PerformanceLayer<F: ConnectionFactory = SqlxConnectionFactory> {
    pub config: Arc<Configuration>,
    pub cache: CacheCoordinator,
    pub rate_limiter: RateLimiter,
    pub pool: ConnectionPool<F>,
    pub stats: Arc<StatsAtomics>,
}
