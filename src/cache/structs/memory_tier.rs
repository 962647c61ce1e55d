use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::AtomicU64;
use parking_lot::Mutex;
use crate::cache::structs::cache_entry::CacheEntry;

/// Bounded in-process tier with FIFO eviction by first insertion.
#[derive(Debug)]
pub struct MemoryTier {
    pub(crate) max_items: usize,
    pub(crate) state: Mutex<MemoryTierState>,
    pub(crate) evictions: AtomicU64,
}

#[derive(Debug, Default)]
pub struct MemoryTierState {
    pub(crate) entries: HashMap<String, (u64, CacheEntry)>,
    pub(crate) order: BTreeMap<u64, String>,
    pub(crate) next_sequence: u64,
}
