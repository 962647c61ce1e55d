use async_trait::async_trait;
use crate::ratelimit::errors::RateLimitError;
use crate::ratelimit::structs::window_outcome::WindowOutcome;

#[async_trait]
pub trait RateLimitStore: Send + Sync {
    fn name(&self) -> &'static str;

    /// Prunes events before `now_ms - window_ms`, then records `now_ms` unless
    /// `limit` events remain. Must be atomic per `(identifier, action)`.
    async fn hit(&self, identifier: &str, action: &str, now_ms: i64, window_ms: i64, limit: u64) -> Result<WindowOutcome, RateLimitError>;

    async fn reset(&self, identifier: &str, action: &str) -> Result<(), RateLimitError>;

    /// Drops records with no event left in their window.
    async fn purge_idle(&self, _now_ms: i64) -> Result<usize, RateLimitError> {
        Ok(0)
    }
}
