use crate::cache::enums::cache_engine::CacheEngine;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DistributedTierConfig {
    pub enabled: bool,
    pub engine: CacheEngine,
    pub address: String,
    pub prefix: String,
}

impl Default for DistributedTierConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            engine: CacheEngine::redis,
            address: "127.0.0.1:6379".to_string(),
            prefix: "mentorship:".to_string(),
        }
    }
}
