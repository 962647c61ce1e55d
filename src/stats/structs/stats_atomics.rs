use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub memory_hits: AtomicI64,
    pub memory_misses: AtomicI64,
    pub memory_errors: AtomicI64,
    pub distributed_hits: AtomicI64,
    pub distributed_misses: AtomicI64,
    pub distributed_errors: AtomicI64,
    pub durable_hits: AtomicI64,
    pub durable_misses: AtomicI64,
    pub durable_errors: AtomicI64,
    pub cache_sets: AtomicI64,
    pub cache_set_failures: AtomicI64,
    pub cache_tier_write_failures: AtomicI64,
    pub cache_deletes: AtomicI64,
    pub cache_promotions: AtomicI64,
    pub cache_expired: AtomicI64,
    pub cache_corrupt: AtomicI64,
    pub cache_tag_writes: AtomicI64,
    pub cache_tag_invalidations: AtomicI64,
    pub cache_invalidated_keys: AtomicI64,
    pub cache_producer_calls: AtomicI64,
    pub rate_limit_checks: AtomicI64,
    pub rate_limit_allowed: AtomicI64,
    pub rate_limit_rejected: AtomicI64,
    pub rate_limit_errors: AtomicI64,
    pub pool_acquired: AtomicI64,
    pub pool_created: AtomicI64,
    pub pool_reused: AtomicI64,
    pub pool_released: AtomicI64,
    pub pool_discarded: AtomicI64,
    pub pool_reaped: AtomicI64,
    pub pool_exhausted: AtomicI64,
    pub pool_connect_errors: AtomicI64,
    pub pool_validation_failures: AtomicI64,
}
