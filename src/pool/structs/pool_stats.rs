use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PoolStats {
    pub max_size: usize,
    pub min_size: usize,
    pub live: usize,
    pub idle: usize,
    pub in_use: usize,
    pub waiting: usize,
    pub utilization: f64,
    pub closed: bool,
}
