use serde::{Deserialize, Serialize};
use crate::cache::enums::cache_tier_kind::CacheTierKind;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CacheStats {
    pub tiers: Vec<TierStats>,
    pub lookups: i64,
    pub hits: i64,
    pub hit_ratio: f64,
    pub memory_items: usize,
    pub memory_capacity: usize,
    pub memory_evictions: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TierStats {
    pub tier: CacheTierKind,
    pub enabled: bool,
    pub hits: i64,
    pub misses: i64,
    pub errors: i64,
    pub hit_ratio: f64,
}
