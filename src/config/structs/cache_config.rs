use serde::{Deserialize, Serialize};
use crate::config::structs::distributed_tier_config::DistributedTierConfig;
use crate::config::structs::durable_tier_config::DurableTierConfig;
use crate::config::structs::memory_tier_config::MemoryTierConfig;
use crate::config::structs::ttl_policy_config::TtlPolicyConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CacheConfig {
    pub tag_prefix: String,
    pub maintenance_interval: u64,
    pub memory: MemoryTierConfig,
    pub durable: DurableTierConfig,
    pub distributed: DistributedTierConfig,
    pub ttl_policy: TtlPolicyConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            tag_prefix: String::from("tag:"),
            maintenance_interval: 300,
            memory: MemoryTierConfig::default(),
            durable: DurableTierConfig::default(),
            distributed: DistributedTierConfig::default(),
            ttl_policy: TtlPolicyConfig::default(),
        }
    }
}
