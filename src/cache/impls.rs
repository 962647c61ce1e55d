pub mod cache_coordinator;
pub mod cache_connector_memcache;
pub mod cache_connector_redis;
pub mod cache_engine;
pub mod cache_entry;
pub mod cache_tier_kind;
pub mod compression_algorithm;
pub mod distributed_tier;
pub mod durable_tier;
pub mod memory_tier;
pub mod tag_index;
pub mod ttl_policy;
