use serde::{Deserialize, Serialize};
use crate::pool::enums::database_drivers::DatabaseDrivers;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PoolConfig {
    pub engine: DatabaseDrivers,
    pub dsn: String,
    pub min_size: usize,
    pub max_size: usize,
    pub idle_timeout: u64,
    pub acquire_timeout: u64,
    pub connect_timeout: u64,
    pub reap_interval: u64,
    pub drain_timeout: u64,
    pub test_on_acquire: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            engine: DatabaseDrivers::sqlite3,
            dsn: String::from("sqlite://data.db?mode=rwc"),
            min_size: 1,
            max_size: 10,
            idle_timeout: 300,
            acquire_timeout: 5,
            connect_timeout: 5,
            reap_interval: 60,
            drain_timeout: 10,
            test_on_acquire: true,
        }
    }
}
