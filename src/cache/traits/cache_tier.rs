use async_trait::async_trait;
use crate::cache::enums::cache_tier_kind::CacheTierKind;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_entry::CacheEntry;

/// Storage contract shared by every cache tier.
///
/// Tiers store whole `CacheEntry` values and never interpret expiry on reads;
/// the coordinator decides whether an entry returned by `try_get` is still live.
#[async_trait]
pub trait CacheTier: Send + Sync {
    fn kind(&self) -> CacheTierKind;

    async fn try_get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError>;

    async fn put(&self, entry: &CacheEntry) -> Result<(), CacheError>;

    /// Returns whether the tier held the key.
    async fn remove(&self, key: &str) -> Result<bool, CacheError>;

    async fn clear(&self) -> Result<(), CacheError>;

    /// Drops entries with `expires_at <= now`. Tiers with native expiry keep the default.
    async fn purge_expired(&self, _now: i64) -> Result<usize, CacheError> {
        Ok(0)
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }
}
