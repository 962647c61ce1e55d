use serde::{Deserialize, Serialize};
use crate::config::structs::api_config::ApiConfig;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::pool_config::PoolConfig;
use crate::config::structs::rate_limiter_config::RateLimiterConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub log_console_interval: u64,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub rate_limiter: RateLimiterConfig,
    #[serde(default)]
    pub pool: PoolConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub sentry: SentryConfig,
}
