//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Administrative API server configuration.
pub mod api_config;

/// Cache coordinator configuration (all tiers).
pub mod cache_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Disk-backed tier configuration.
pub mod durable_tier_config;

/// Distributed key-value tier configuration (Redis/Memcache).
pub mod distributed_tier_config;

/// In-process tier configuration.
pub mod memory_tier_config;

/// Connection pool configuration.
pub mod pool_config;

/// Rate limiter configuration and named policies.
pub mod rate_limiter_config;

/// Sentry error reporting configuration.
pub mod sentry_config;

/// Key-prefix to TTL table.
pub mod ttl_policy_config;
