use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Tier unavailable: {0}")]
    TierUnavailable(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("All cache tiers failed to store key: {0}")]
    AllTiersFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Memcache error: {0}")]
    MemcacheError(#[from] memcache::MemcacheError),
}

impl CacheError {
    /// Corrupt or unreadable stored data; callers treat it as a miss.
    pub fn is_serialization(&self) -> bool {
        matches!(self, CacheError::SerializationError(_))
    }
}
