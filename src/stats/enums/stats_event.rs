//! Statistics event types for tracking the layer's activity.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant maps to one atomic counter in `StatsAtomics`. Used with
/// `StatsAtomics::update_stats()`; negative values decrement.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    MemoryHits,
    MemoryMisses,
    MemoryErrors,
    DistributedHits,
    DistributedMisses,
    DistributedErrors,
    DurableHits,
    DurableMisses,
    DurableErrors,
    CacheSets,
    CacheSetFailures,
    CacheTierWriteFailures,
    CacheDeletes,
    CachePromotions,
    CacheExpired,
    CacheCorrupt,
    CacheTagWrites,
    CacheTagInvalidations,
    CacheInvalidatedKeys,
    CacheProducerCalls,
    RateLimitChecks,
    RateLimitAllowed,
    RateLimitRejected,
    RateLimitErrors,
    PoolAcquired,
    PoolCreated,
    PoolReused,
    PoolReleased,
    PoolDiscarded,
    PoolReaped,
    PoolExhausted,
    PoolConnectErrors,
    PoolValidationFailures,
}
