use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::cache::enums::cache_tier_kind::CacheTierKind;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_coordinator::CacheCoordinator;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::cache_stats::{CacheStats, TierStats};
use crate::cache::structs::distributed_tier::DistributedTier;
use crate::cache::structs::durable_tier::DurableTier;
use crate::cache::structs::memory_tier::MemoryTier;
use crate::cache::structs::tag_index::TagIndex;
use crate::cache::structs::ttl_policy::TtlPolicy;
use crate::cache::traits::cache_tier::CacheTier;
use crate::common::common::{current_time_millis, ratio};
use crate::config::structs::cache_config::CacheConfig;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl CacheCoordinator {
    /// `lower_tiers` are probed after memory, in the given order.
    pub fn new(memory: Arc<MemoryTier>, lower_tiers: Vec<Arc<dyn CacheTier>>, ttl_policy: TtlPolicy, tag_prefix: &str, stats: Arc<StatsAtomics>) -> CacheCoordinator {
        let mut tiers: Vec<Arc<dyn CacheTier>> = Vec::with_capacity(lower_tiers.len() + 1);
        tiers.push(memory.clone());
        tiers.extend(lower_tiers);
        CacheCoordinator {
            memory,
            tiers,
            ttl_policy,
            tag_prefix: tag_prefix.to_string(),
            tag_lock: tokio::sync::Mutex::new(()),
            stats,
        }
    }

    pub async fn from_config(config: &CacheConfig, distributed: Option<Arc<DistributedTier>>, stats: Arc<StatsAtomics>) -> Result<CacheCoordinator, CacheError> {
        let memory = Arc::new(MemoryTier::new(config.memory.max_items));
        let mut lower_tiers: Vec<Arc<dyn CacheTier>> = Vec::new();
        if let Some(distributed) = distributed {
            lower_tiers.push(distributed);
        }
        if config.durable.enabled {
            let durable = DurableTier::new(&config.durable.path, config.durable.compression).await?;
            lower_tiers.push(Arc::new(durable));
        }
        let coordinator = CacheCoordinator::new(memory, lower_tiers, TtlPolicy::from_config(&config.ttl_policy), &config.tag_prefix, stats);
        info!("[CACHE] Tiers: {}", coordinator.tier_kinds().iter().map(|kind| kind.as_str()).collect::<Vec<_>>().join(" -> "));
        Ok(coordinator)
    }

    pub fn tier_kinds(&self) -> Vec<CacheTierKind> {
        self.tiers.iter().map(|tier| tier.kind()).collect()
    }

    pub fn memory(&self) -> &Arc<MemoryTier> {
        &self.memory
    }

    pub fn ttl_policy(&self) -> &TtlPolicy {
        &self.ttl_policy
    }

    pub fn tag_key(&self, tag: &str) -> String {
        format!("{}{}", self.tag_prefix, tag)
    }

    fn validate_key(key: &str) -> Result<(), CacheError> {
        if key.is_empty() {
            return Err(CacheError::InvalidKey(String::from("empty key")));
        }
        Ok(())
    }

    fn count(&self, event: StatsEvent) {
        self.stats.update_stats(event, 1);
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.get_entry(key).await.map(|entry| entry.payload)
    }

    pub async fn get_entry(&self, key: &str) -> Option<CacheEntry> {
        self.lookup(key, true).await
    }

    async fn lookup(&self, key: &str, record: bool) -> Option<CacheEntry> {
        let now = current_time_millis();
        for (index, tier) in self.tiers.iter().enumerate() {
            let kind = tier.kind();
            match tier.try_get(key).await {
                Ok(Some(entry)) if entry.is_expired(now) => {
                    self.count(StatsEvent::CacheExpired);
                    if let Err(e) = tier.remove(key).await {
                        warn!("[CACHE] Failed removing expired {key} from {kind}: {e}");
                    }
                }
                Ok(Some(entry)) => {
                    if record {
                        self.count(kind.hit_event());
                    }
                    if index > 0 {
                        self.promote(&entry, index).await;
                    }
                    return Some(entry);
                }
                Ok(None) => {}
                Err(e) if e.is_serialization() => {
                    self.count(StatsEvent::CacheCorrupt);
                    warn!("[CACHE] Corrupt entry {key} in {kind}, dropping: {e}");
                    if let Err(e) = tier.remove(key).await {
                        warn!("[CACHE] Failed removing corrupt {key} from {kind}: {e}");
                    }
                }
                Err(e) => {
                    self.count(kind.error_event());
                    warn!("[CACHE] {kind} lookup of {key} failed: {e}");
                    continue;
                }
            }
            if record {
                self.count(kind.miss_event());
            }
        }
        None
    }

    async fn promote(&self, entry: &CacheEntry, found_at: usize) {
        for tier in &self.tiers[..found_at] {
            match tier.put(entry).await {
                Ok(_) => {
                    self.count(StatsEvent::CachePromotions);
                    debug!("[CACHE] Promoted {} into {}", entry.key, tier.kind());
                }
                Err(e) => {
                    self.count(tier.kind().error_event());
                    warn!("[CACHE] Promotion of {} into {} failed: {e}", entry.key, tier.kind());
                }
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self, value), fields(bytes = value.len()))]
    pub async fn set(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<(), CacheError> {
        Self::validate_key(key)?;
        let entry = CacheEntry::new(key, value, self.ttl_policy.resolve(key, ttl), current_time_millis());
        self.store(&entry).await
    }

    /// Writes the entry to every tier; fails only when none accepted it.
    async fn store(&self, entry: &CacheEntry) -> Result<(), CacheError> {
        let mut stored = 0usize;
        for tier in &self.tiers {
            match tier.put(entry).await {
                Ok(_) => stored += 1,
                Err(e) => {
                    self.count(StatsEvent::CacheTierWriteFailures);
                    self.count(tier.kind().error_event());
                    warn!("[CACHE] Writing {} to {} failed: {e}", entry.key, tier.kind());
                }
            }
        }
        if stored == 0 {
            self.count(StatsEvent::CacheSetFailures);
            error!("[CACHE] No tier accepted {}", entry.key);
            sentry::capture_message(&format!("all cache tiers failed to store {}", entry.key), sentry::Level::Error);
            return Err(CacheError::AllTiersFailed(entry.key.clone()));
        }
        self.count(StatsEvent::CacheSets);
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn delete(&self, key: &str) -> bool {
        let mut removed = false;
        for tier in &self.tiers {
            match tier.remove(key).await {
                Ok(held) => removed |= held,
                Err(e) => {
                    self.count(tier.kind().error_event());
                    warn!("[CACHE] Removing {key} from {} failed: {e}", tier.kind());
                }
            }
        }
        if removed {
            self.count(StatsEvent::CacheDeletes);
        }
        removed
    }

    /// Returns the cached value, or runs `producer` and caches its output.
    ///
    /// A producer error is returned untouched and nothing is stored. A failure to
    /// store the produced value is only logged. Concurrent misses on the same key
    /// each run their own producer.
    #[tracing::instrument(level = "debug", skip(self, producer))]
    pub async fn remember<F, Fut, E>(&self, key: &str, ttl: Option<Duration>, producer: F) -> Result<Vec<u8>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<u8>, E>>,
    {
        if let Some(value) = self.get(key).await {
            return Ok(value);
        }
        self.count(StatsEvent::CacheProducerCalls);
        let value = producer().await?;
        if let Err(e) = self.set(key, value.clone(), ttl).await {
            error!("[CACHE] Could not store produced value for {key}: {e}");
        }
        Ok(value)
    }

    /// Stores the value with `tags` recorded, then adds the key to each tag index.
    ///
    /// Fails only when the value itself could not be stored. A tag index that
    /// cannot be written is logged and skipped, and the remaining tags are still
    /// updated.
    #[tracing::instrument(level = "debug", skip(self, value))]
    pub async fn tag(&self, tags: &[&str], key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<(), CacheError> {
        Self::validate_key(key)?;
        let now = current_time_millis();
        let entry = CacheEntry::new(key, value, self.ttl_policy.resolve(key, ttl), now)
            .with_tags(tags.iter().copied());
        self.store(&entry).await?;

        let _guard = self.tag_lock.lock().await;
        for tag in tags {
            let index_key = self.tag_key(tag);
            let (mut index, expires_at) = match self.lookup(&index_key, false).await {
                Some(existing) => match TagIndex::from_payload(&existing.payload) {
                    Ok(index) => (index, existing.expires_at.max(entry.expires_at)),
                    Err(e) => {
                        warn!("[CACHE] Rebuilding unreadable index for tag {tag}: {e}");
                        (TagIndex::default(), entry.expires_at)
                    }
                },
                None => (TagIndex::default(), entry.expires_at),
            };
            index.insert(key);
            let payload = match index.to_payload() {
                Ok(payload) => payload,
                Err(e) => {
                    error!("[CACHE] Could not encode index for tag {tag}: {e}");
                    continue;
                }
            };
            let index_entry = CacheEntry {
                key: index_key,
                payload,
                created_at: now,
                expires_at,
                tags: Default::default(),
            };
            // Re-queue behind the keys it lists so FIFO eviction drops those first.
            self.memory.take(&index_entry.key);
            match self.store(&index_entry).await {
                Ok(_) => self.count(StatsEvent::CacheTagWrites),
                Err(e) => error!("[CACHE] Index for tag {tag} not updated with {key}: {e}"),
            }
        }
        Ok(())
    }

    /// Deletes every key recorded under `tag` and the index itself.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn invalidate_tag(&self, tag: &str) -> usize {
        let _guard = self.tag_lock.lock().await;
        let index_key = self.tag_key(tag);
        let Some(entry) = self.lookup(&index_key, false).await else {
            debug!("[CACHE] Tag {tag} has no index");
            return 0;
        };
        let index = match TagIndex::from_payload(&entry.payload) {
            Ok(index) => index,
            Err(e) => {
                warn!("[CACHE] Discarding unreadable index for tag {tag}: {e}");
                TagIndex::default()
            }
        };
        let mut removed = 0usize;
        for key in index.keys() {
            if self.delete(key).await {
                removed += 1;
            }
        }
        self.delete(&index_key).await;
        self.count(StatsEvent::CacheTagInvalidations);
        self.stats.update_stats(StatsEvent::CacheInvalidatedKeys, removed as i64);
        info!("[CACHE] Invalidated tag {tag}: {removed} of {} keys removed", index.len());
        removed
    }

    pub async fn invalidate_tags(&self, tags: &[&str]) -> usize {
        let mut removed = 0;
        for tag in tags {
            removed += self.invalidate_tag(tag).await;
        }
        removed
    }

    pub async fn clear(&self) {
        for tier in &self.tiers {
            if let Err(e) = tier.clear().await {
                self.count(tier.kind().error_event());
                warn!("[CACHE] Clearing {} failed: {e}", tier.kind());
            }
        }
        info!("[CACHE] Cleared all tiers");
    }

    /// Sweeps expired entries out of every tier, returning how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        let now = current_time_millis();
        let mut purged = 0usize;
        for tier in &self.tiers {
            match tier.purge_expired(now).await {
                Ok(count) => purged += count,
                Err(e) => {
                    self.count(tier.kind().error_event());
                    warn!("[CACHE] Expiry sweep of {} failed: {e}", tier.kind());
                }
            }
        }
        if purged > 0 {
            self.stats.update_stats(StatsEvent::CacheExpired, purged as i64);
            debug!("[CACHE] Purged {purged} expired entries");
        }
        purged
    }

    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let payload = self.get(key).await?;
        match serde_json::from_slice(&payload) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("[CACHE] {key} does not hold the requested JSON shape: {e}");
                None
            }
        }
    }

    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<(), CacheError> {
        let payload = serde_json::to_vec(value)
            .map_err(|e| CacheError::SerializationError(e.to_string()))?;
        self.set(key, payload, ttl).await
    }

    pub async fn remember_json<T, F, Fut, E>(&self, key: &str, ttl: Option<Duration>, producer: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get_json(key).await {
            return Ok(value);
        }
        self.count(StatsEvent::CacheProducerCalls);
        let value = producer().await?;
        if let Err(e) = self.set_json(key, &value, ttl).await {
            error!("[CACHE] Could not store produced value for {key}: {e}");
        }
        Ok(value)
    }

    pub fn stats(&self) -> CacheStats {
        let enabled = self.tier_kinds();
        let tiers: Vec<TierStats> = CacheTierKind::ALL.iter().map(|kind| {
            let hits = self.stats.get_stat(kind.hit_event());
            let misses = self.stats.get_stat(kind.miss_event());
            TierStats {
                tier: *kind,
                enabled: enabled.contains(kind),
                hits,
                misses,
                errors: self.stats.get_stat(kind.error_event()),
                hit_ratio: ratio(hits, hits + misses),
            }
        }).collect();
        let lookups = self.stats.get_stat(StatsEvent::MemoryHits) + self.stats.get_stat(StatsEvent::MemoryMisses);
        let hits: i64 = tiers.iter().map(|tier| tier.hits).sum();
        CacheStats {
            tiers,
            lookups,
            hits,
            hit_ratio: ratio(hits, lookups),
            memory_items: self.memory.len(),
            memory_capacity: self.memory.capacity(),
            memory_evictions: self.memory.evictions(),
        }
    }
}
