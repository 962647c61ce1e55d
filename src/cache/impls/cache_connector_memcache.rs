use std::fmt;
use std::sync::Arc;
use log::{debug, warn};
use parking_lot::Mutex;
use sha1::{Digest, Sha1};
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::common::common::current_time_millis;

const MAX_KEY_LENGTH: usize = 250;
/// Memcache reads larger expirations as absolute unix timestamps.
const RELATIVE_EXPIRATION_LIMIT: u64 = 60 * 60 * 24 * 30;

impl fmt::Debug for CacheConnectorMemcache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorMemcache")
            .field("client", &"<memcache::Client>")
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl CacheConnectorMemcache {
    pub async fn connect(url: &str, prefix: &str) -> Result<Self, CacheError> {
        let url = url.to_string();
        let client = tokio::task::spawn_blocking(move || memcache::connect(url.as_str()))
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Memcache connect task failed: {e}")))?
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Memcache: {e}")))?;
        Ok(Self {
            client: Arc::new(Mutex::new(client)),
            prefix: prefix.to_string(),
        })
    }

    /// Prefixes the key, hashing it when memcache would reject it.
    pub fn entry_key(&self, key: &str) -> String {
        let full = format!("{}{}", self.prefix, key);
        if full.len() > MAX_KEY_LENGTH || full.chars().any(|c| c.is_whitespace() || c.is_control()) {
            let mut hasher = Sha1::new();
            hasher.update(key.as_bytes());
            return format!("{}h:{}", self.prefix, hex::encode(hasher.finalize().as_slice()));
        }
        full
    }

    pub fn expiration(ttl_millis: i64) -> u32 {
        let seconds = (ttl_millis.max(0) as u64).div_ceil(1000).max(1);
        if seconds > RELATIVE_EXPIRATION_LIMIT {
            let absolute = (current_time_millis().max(0) as u64) / 1000 + seconds;
            return u32::try_from(absolute).unwrap_or(u32::MAX);
        }
        seconds as u32
    }

    async fn run<T, F>(&self, operation: F) -> Result<T, CacheError>
    where
        T: Send + 'static,
        F: FnOnce(&memcache::Client) -> Result<T, memcache::MemcacheError> + Send + 'static,
    {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || {
            let client = client.lock();
            operation(&*client)
        })
            .await
            .map_err(|e| CacheError::TierUnavailable(format!("memcache task failed: {e}")))?
            .map_err(CacheError::MemcacheError)
    }

    pub async fn ping(&self) -> Result<(), CacheError> {
        self.run(|client| client.version().map(|_| ())).await
    }

    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let key = self.entry_key(key);
        self.run(move |client| client.get::<Vec<u8>>(&key)).await
    }

    pub async fn set(&self, key: &str, value: &[u8], ttl_millis: i64) -> Result<(), CacheError> {
        let key = self.entry_key(key);
        let value = value.to_vec();
        let expiration = Self::expiration(ttl_millis);
        self.run(move |client| client.set(&key, value.as_slice(), expiration)).await?;
        debug!("[MEMCACHE] Set entry exp={expiration}");
        Ok(())
    }

    pub async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let key = self.entry_key(key);
        self.run(move |client| client.delete(&key)).await
    }

    /// Memcache cannot enumerate keys, so clearing flushes the whole server.
    pub async fn flush(&self) -> Result<(), CacheError> {
        warn!("[MEMCACHE] Flushing every key on the server");
        self.run(|client| client.flush()).await
    }
}
