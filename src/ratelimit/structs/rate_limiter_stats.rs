use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RateLimiterStats {
    pub backend: String,
    pub checks: i64,
    pub allowed: i64,
    pub rejected: i64,
    pub errors: i64,
    pub rejection_ratio: f64,
    pub rejected_by_action: BTreeMap<String, u64>,
}
