use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MemoryTierConfig {
    pub max_items: usize,
}

impl Default for MemoryTierConfig {
    fn default() -> Self {
        Self { max_items: 1000 }
    }
}
