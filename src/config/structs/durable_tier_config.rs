use serde::{Deserialize, Serialize};
use crate::cache::enums::compression_algorithm::CompressionAlgorithm;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DurableTierConfig {
    pub enabled: bool,
    pub path: String,
    pub compression: CompressionAlgorithm,
}

impl Default for DurableTierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: String::from("cache"),
            compression: CompressionAlgorithm::lz4,
        }
    }
}
