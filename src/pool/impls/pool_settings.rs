use std::time::Duration;
use crate::config::structs::pool_config::PoolConfig;
use crate::pool::structs::pool_settings::PoolSettings;

impl PoolSettings {
    pub fn from_config(config: &PoolConfig) -> PoolSettings {
        PoolSettings {
            min_size: config.min_size,
            max_size: config.max_size,
            idle_timeout: Duration::from_secs(config.idle_timeout),
            acquire_timeout: Duration::from_secs(config.acquire_timeout),
            connect_timeout: Duration::from_secs(config.connect_timeout),
            test_on_acquire: config.test_on_acquire,
        }
    }
}

impl Default for PoolSettings {
    fn default() -> Self {
        PoolSettings::from_config(&PoolConfig::default())
    }
}
