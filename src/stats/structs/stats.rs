use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub memory_hits: i64,
    pub memory_misses: i64,
    pub memory_errors: i64,
    pub distributed_hits: i64,
    pub distributed_misses: i64,
    pub distributed_errors: i64,
    pub durable_hits: i64,
    pub durable_misses: i64,
    pub durable_errors: i64,
    pub cache_sets: i64,
    pub cache_set_failures: i64,
    pub cache_tier_write_failures: i64,
    pub cache_deletes: i64,
    pub cache_promotions: i64,
    pub cache_expired: i64,
    pub cache_corrupt: i64,
    pub cache_tag_writes: i64,
    pub cache_tag_invalidations: i64,
    pub cache_invalidated_keys: i64,
    pub cache_producer_calls: i64,
    pub rate_limit_checks: i64,
    pub rate_limit_allowed: i64,
    pub rate_limit_rejected: i64,
    pub rate_limit_errors: i64,
    pub pool_acquired: i64,
    pub pool_created: i64,
    pub pool_reused: i64,
    pub pool_released: i64,
    pub pool_discarded: i64,
    pub pool_reaped: i64,
    pub pool_exhausted: i64,
    pub pool_connect_errors: i64,
    pub pool_validation_failures: i64,
}
