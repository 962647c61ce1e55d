use log::debug;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;

const SCAN_BATCH: u64 = 500;

impl CacheConnectorRedis {
    pub async fn connect(url: &str, prefix: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis client: {e}")))?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis: {e}")))?;
        Ok(Self {
            connection,
            prefix: prefix.to_string(),
        })
    }

    pub fn connection(&self) -> redis::aio::MultiplexedConnection {
        self.connection.clone()
    }

    fn entry_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    pub async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("GET")
            .arg(self.entry_key(key))
            .query_async::<Option<Vec<u8>>>(&mut conn)
            .await
            .map_err(CacheError::RedisError)
    }

    pub async fn set(&self, key: &str, value: &[u8], ttl_millis: i64) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("SET")
            .arg(self.entry_key(key))
            .arg(value)
            .arg("PX")
            .arg(ttl_millis)
            .query_async::<()>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[REDIS] Set {key} px={ttl_millis}");
        Ok(())
    }

    pub async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.connection.clone();
        let removed = redis::cmd("DEL")
            .arg(self.entry_key(key))
            .query_async::<i64>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(removed > 0)
    }

    /// Deletes every key under this connector's prefix.
    pub async fn delete_prefixed(&self) -> Result<usize, CacheError> {
        let mut conn = self.connection.clone();
        let pattern = format!("{}*", self.prefix);
        let mut cursor: u64 = 0;
        let mut removed = 0usize;
        loop {
            let (next, keys) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async::<(u64, Vec<String>)>(&mut conn)
                .await
                .map_err(CacheError::RedisError)?;
            if !keys.is_empty() {
                let deleted = redis::cmd("DEL")
                    .arg(&keys)
                    .query_async::<i64>(&mut conn)
                    .await
                    .map_err(CacheError::RedisError)?;
                removed += deleted.max(0) as usize;
            }
            if next == 0 {
                break;
            }
            cursor = next;
        }
        debug!("[REDIS] Cleared {removed} keys under {}", self.prefix);
        Ok(removed)
    }
}
