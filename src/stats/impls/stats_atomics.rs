use std::sync::atomic::{AtomicI64, Ordering};
use crate::common::common::current_time_millis;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(current_time_millis() / 1000, Ordering::SeqCst);
        stats
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::MemoryHits => &self.memory_hits,
            StatsEvent::MemoryMisses => &self.memory_misses,
            StatsEvent::MemoryErrors => &self.memory_errors,
            StatsEvent::DistributedHits => &self.distributed_hits,
            StatsEvent::DistributedMisses => &self.distributed_misses,
            StatsEvent::DistributedErrors => &self.distributed_errors,
            StatsEvent::DurableHits => &self.durable_hits,
            StatsEvent::DurableMisses => &self.durable_misses,
            StatsEvent::DurableErrors => &self.durable_errors,
            StatsEvent::CacheSets => &self.cache_sets,
            StatsEvent::CacheSetFailures => &self.cache_set_failures,
            StatsEvent::CacheTierWriteFailures => &self.cache_tier_write_failures,
            StatsEvent::CacheDeletes => &self.cache_deletes,
            StatsEvent::CachePromotions => &self.cache_promotions,
            StatsEvent::CacheExpired => &self.cache_expired,
            StatsEvent::CacheCorrupt => &self.cache_corrupt,
            StatsEvent::CacheTagWrites => &self.cache_tag_writes,
            StatsEvent::CacheTagInvalidations => &self.cache_tag_invalidations,
            StatsEvent::CacheInvalidatedKeys => &self.cache_invalidated_keys,
            StatsEvent::CacheProducerCalls => &self.cache_producer_calls,
            StatsEvent::RateLimitChecks => &self.rate_limit_checks,
            StatsEvent::RateLimitAllowed => &self.rate_limit_allowed,
            StatsEvent::RateLimitRejected => &self.rate_limit_rejected,
            StatsEvent::RateLimitErrors => &self.rate_limit_errors,
            StatsEvent::PoolAcquired => &self.pool_acquired,
            StatsEvent::PoolCreated => &self.pool_created,
            StatsEvent::PoolReused => &self.pool_reused,
            StatsEvent::PoolReleased => &self.pool_released,
            StatsEvent::PoolDiscarded => &self.pool_discarded,
            StatsEvent::PoolReaped => &self.pool_reaped,
            StatsEvent::PoolExhausted => &self.pool_exhausted,
            StatsEvent::PoolConnectErrors => &self.pool_connect_errors,
            StatsEvent::PoolValidationFailures => &self.pool_validation_failures,
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> i64
    {
        self.counter(event).fetch_add(value, Ordering::SeqCst) + value
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.counter(event).store(value, Ordering::SeqCst);
    }

    pub fn get_stat(&self, event: StatsEvent) -> i64
    {
        self.counter(event).load(Ordering::SeqCst)
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            memory_hits: self.memory_hits.load(Ordering::SeqCst),
            memory_misses: self.memory_misses.load(Ordering::SeqCst),
            memory_errors: self.memory_errors.load(Ordering::SeqCst),
            distributed_hits: self.distributed_hits.load(Ordering::SeqCst),
            distributed_misses: self.distributed_misses.load(Ordering::SeqCst),
            distributed_errors: self.distributed_errors.load(Ordering::SeqCst),
            durable_hits: self.durable_hits.load(Ordering::SeqCst),
            durable_misses: self.durable_misses.load(Ordering::SeqCst),
            durable_errors: self.durable_errors.load(Ordering::SeqCst),
            cache_sets: self.cache_sets.load(Ordering::SeqCst),
            cache_set_failures: self.cache_set_failures.load(Ordering::SeqCst),
            cache_tier_write_failures: self.cache_tier_write_failures.load(Ordering::SeqCst),
            cache_deletes: self.cache_deletes.load(Ordering::SeqCst),
            cache_promotions: self.cache_promotions.load(Ordering::SeqCst),
            cache_expired: self.cache_expired.load(Ordering::SeqCst),
            cache_corrupt: self.cache_corrupt.load(Ordering::SeqCst),
            cache_tag_writes: self.cache_tag_writes.load(Ordering::SeqCst),
            cache_tag_invalidations: self.cache_tag_invalidations.load(Ordering::SeqCst),
            cache_invalidated_keys: self.cache_invalidated_keys.load(Ordering::SeqCst),
            cache_producer_calls: self.cache_producer_calls.load(Ordering::SeqCst),
            rate_limit_checks: self.rate_limit_checks.load(Ordering::SeqCst),
            rate_limit_allowed: self.rate_limit_allowed.load(Ordering::SeqCst),
            rate_limit_rejected: self.rate_limit_rejected.load(Ordering::SeqCst),
            rate_limit_errors: self.rate_limit_errors.load(Ordering::SeqCst),
            pool_acquired: self.pool_acquired.load(Ordering::SeqCst),
            pool_created: self.pool_created.load(Ordering::SeqCst),
            pool_reused: self.pool_reused.load(Ordering::SeqCst),
            pool_released: self.pool_released.load(Ordering::SeqCst),
            pool_discarded: self.pool_discarded.load(Ordering::SeqCst),
            pool_reaped: self.pool_reaped.load(Ordering::SeqCst),
            pool_exhausted: self.pool_exhausted.load(Ordering::SeqCst),
            pool_connect_errors: self.pool_connect_errors.load(Ordering::SeqCst),
            pool_validation_failures: self.pool_validation_failures.load(Ordering::SeqCst),
        }
    }
}
