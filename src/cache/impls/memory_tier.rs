use std::sync::atomic::{AtomicU64, Ordering};
use async_trait::async_trait;
use log::debug;
use parking_lot::Mutex;
use crate::cache::enums::cache_tier_kind::CacheTierKind;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::memory_tier::{MemoryTier, MemoryTierState};
use crate::cache::traits::cache_tier::CacheTier;

impl MemoryTier {
    pub fn new(max_items: usize) -> MemoryTier {
        MemoryTier {
            max_items,
            state: Mutex::new(MemoryTierState::default()),
            evictions: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.max_items
    }

    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.state.lock().entries.contains_key(key)
    }

    /// Keys in eviction order, oldest insertion first.
    pub fn keys(&self) -> Vec<String> {
        self.state.lock().order.values().cloned().collect()
    }

    fn insert(&self, entry: CacheEntry) -> Result<(), CacheError> {
        if self.max_items == 0 {
            return Err(CacheError::TierUnavailable(String::from("memory tier has no capacity")));
        }
        let mut state = self.state.lock();
        if let Some((_, existing)) = state.entries.get_mut(&entry.key) {
            *existing = entry;
            return Ok(());
        }
        while state.entries.len() >= self.max_items {
            let Some((_, oldest)) = state.order.pop_first() else { break };
            state.entries.remove(&oldest);
            self.evictions.fetch_add(1, Ordering::Relaxed);
            debug!("[MEMORY] Evicted {oldest}");
        }
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.order.insert(sequence, entry.key.clone());
        state.entries.insert(entry.key.clone(), (sequence, entry));
        Ok(())
    }

    pub(crate) fn take(&self, key: &str) -> bool {
        let mut state = self.state.lock();
        match state.entries.remove(key) {
            Some((sequence, _)) => {
                state.order.remove(&sequence);
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl CacheTier for MemoryTier {
    fn kind(&self) -> CacheTierKind {
        CacheTierKind::memory
    }

    async fn try_get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        Ok(self.state.lock().entries.get(key).map(|(_, entry)| entry.clone()))
    }

    async fn put(&self, entry: &CacheEntry) -> Result<(), CacheError> {
        self.insert(entry.clone())
    }

    async fn remove(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.take(key))
    }

    async fn clear(&self) -> Result<(), CacheError> {
        let mut state = self.state.lock();
        state.entries.clear();
        state.order.clear();
        Ok(())
    }

    async fn purge_expired(&self, now: i64) -> Result<usize, CacheError> {
        let mut state = self.state.lock();
        let expired: Vec<(u64, String)> = state.entries.iter()
            .filter(|(_, (_, entry))| entry.is_expired(now))
            .map(|(key, (sequence, _))| (*sequence, key.clone()))
            .collect();
        for (sequence, key) in &expired {
            state.order.remove(sequence);
            state.entries.remove(key);
        }
        Ok(expired.len())
    }
}
