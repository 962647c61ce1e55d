//! Cache data structures.

/// One cached value with its timestamps and tags.
pub mod cache_entry;

/// Coordinator spanning all tiers.
pub mod cache_coordinator;

/// Redis-specific distributed connector.
pub mod cache_connector_redis;

/// Memcache-specific distributed connector.
pub mod cache_connector_memcache;

/// Derived cache statistics snapshot.
pub mod cache_stats;

/// Distributed tier dispatching to the configured engine.
pub mod distributed_tier;

/// Disk-backed tier.
pub mod durable_tier;

/// Bounded in-process tier.
pub mod memory_tier;

/// Tag to key-set index stored as a cache entry.
pub mod tag_index;

/// Key-prefix TTL policy.
pub mod ttl_policy;
