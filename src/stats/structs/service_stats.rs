use serde::Serialize;
use crate::cache::structs::cache_stats::CacheStats;
use crate::pool::structs::pool_stats::PoolStats;
use crate::ratelimit::structs::rate_limiter_stats::RateLimiterStats;
use crate::stats::structs::stats::Stats;

/// Everything `stats()` reports: raw counters plus the derived per-component views.
#[derive(Serialize, Debug, Clone)]
pub struct ServiceStats {
    pub uptime_seconds: i64,
    pub counters: Stats,
    pub cache: CacheStats,
    pub rate_limiter: RateLimiterStats,
    pub pool: PoolStats,
}
