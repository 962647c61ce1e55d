use std::collections::BTreeSet;

/// A cached value with its creation and expiry timestamps (unix milliseconds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub key: String,
    pub payload: Vec<u8>,
    pub created_at: i64,
    pub expires_at: i64,
    pub tags: BTreeSet<String>,
}
