use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use parking_lot::Mutex;
use crate::ratelimit::structs::rate_limit_policy::RateLimitPolicy;
use crate::ratelimit::traits::rate_limit_store::RateLimitStore;
use crate::stats::structs::stats_atomics::StatsAtomics;

pub struct RateLimiter {
    pub(crate) store: Arc<dyn RateLimitStore>,
    pub(crate) policies: HashMap<String, RateLimitPolicy>,
    pub(crate) rejected_by_action: Mutex<BTreeMap<String, u64>>,
    pub(crate) stats: Arc<StatsAtomics>,
}
