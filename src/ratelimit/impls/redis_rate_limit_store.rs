use async_trait::async_trait;
use crate::ratelimit::errors::RateLimitError;
use crate::ratelimit::structs::redis_rate_limit_store::RedisRateLimitStore;
use crate::ratelimit::structs::window_outcome::WindowOutcome;
use crate::ratelimit::traits::rate_limit_store::RateLimitStore;

/// KEYS[1] window set; ARGV now, window, limit, member. Returns {allowed, count, oldest}.
const SLIDING_WINDOW_SCRIPT: &str = r"
local key = KEYS[1]
local now = tonumber(ARGV[1])
local window = tonumber(ARGV[2])
local limit = tonumber(ARGV[3])
redis.call('ZREMRANGEBYSCORE', key, '-inf', '(' .. (now - window))
local count = redis.call('ZCARD', key)
local allowed = 0
if count < limit then
    redis.call('ZADD', key, now, ARGV[4])
    count = count + 1
    allowed = 1
end
redis.call('PEXPIRE', key, window)
local oldest = redis.call('ZRANGE', key, 0, 0, 'WITHSCORES')
local oldest_score = -1
if oldest[2] then
    oldest_score = tonumber(oldest[2])
end
return {allowed, count, oldest_score}
";

impl RedisRateLimitStore {
    pub fn new(connection: redis::aio::MultiplexedConnection, key_prefix: &str) -> RedisRateLimitStore {
        RedisRateLimitStore {
            connection,
            key_prefix: key_prefix.to_string(),
            script: redis::Script::new(SLIDING_WINDOW_SCRIPT),
        }
    }

    pub fn window_key(&self, identifier: &str, action: &str) -> String {
        format!("{}{}:{}", self.key_prefix, action, identifier)
    }
}

#[async_trait]
impl RateLimitStore for RedisRateLimitStore {
    fn name(&self) -> &'static str {
        "redis"
    }

    async fn hit(&self, identifier: &str, action: &str, now_ms: i64, window_ms: i64, limit: u64) -> Result<WindowOutcome, RateLimitError> {
        let mut conn = self.connection.clone();
        let member = format!("{now_ms}-{}", uuid::Uuid::new_v4());
        let reply = self.script
            .key(self.window_key(identifier, action))
            .arg(now_ms)
            .arg(window_ms)
            .arg(limit)
            .arg(member)
            .invoke_async::<Vec<i64>>(&mut conn)
            .await?;
        let [allowed, count, oldest] = reply.as_slice() else {
            return Err(RateLimitError::Backend(format!("unexpected script reply {reply:?}")));
        };
        Ok(WindowOutcome {
            allowed: *allowed == 1,
            count: (*count).max(0) as u64,
            oldest_ms: (*oldest >= 0).then_some(*oldest),
        })
    }

    async fn reset(&self, identifier: &str, action: &str) -> Result<(), RateLimitError> {
        let mut conn = self.connection.clone();
        redis::cmd("DEL")
            .arg(self.window_key(identifier, action))
            .query_async::<i64>(&mut conn)
            .await?;
        Ok(())
    }
}
