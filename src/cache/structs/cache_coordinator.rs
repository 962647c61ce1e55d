use std::sync::Arc;
use crate::cache::structs::memory_tier::MemoryTier;
use crate::cache::structs::ttl_policy::TtlPolicy;
use crate::cache::traits::cache_tier::CacheTier;
use crate::stats::structs::stats_atomics::StatsAtomics;

pub struct CacheCoordinator {
    pub(crate) memory: Arc<MemoryTier>,
    /// Lookup order, memory first.
    pub(crate) tiers: Vec<Arc<dyn CacheTier>>,
    pub(crate) ttl_policy: TtlPolicy,
    pub(crate) tag_prefix: String,
    pub(crate) tag_lock: tokio::sync::Mutex<()>,
    pub(crate) stats: Arc<StatsAtomics>,
}
