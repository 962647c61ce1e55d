use async_trait::async_trait;
use crate::ratelimit::errors::RateLimitError;
use crate::ratelimit::structs::local_rate_limit_store::LocalRateLimitStore;
use crate::ratelimit::structs::rate_window_record::RateWindowRecord;
use crate::ratelimit::structs::window_outcome::WindowOutcome;
use crate::ratelimit::traits::rate_limit_store::RateLimitStore;

impl LocalRateLimitStore {
    pub fn new() -> LocalRateLimitStore {
        LocalRateLimitStore::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RateLimitStore for LocalRateLimitStore {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn hit(&self, identifier: &str, action: &str, now_ms: i64, window_ms: i64, limit: u64) -> Result<WindowOutcome, RateLimitError> {
        let mut records = self.records.lock();
        let record = records
            .entry((identifier.to_string(), action.to_string()))
            .or_insert_with(|| RateWindowRecord::new(identifier, action, window_ms));
        record.window_ms = window_ms;
        record.prune(now_ms);
        if record.count() >= limit {
            return Ok(WindowOutcome { allowed: false, count: record.count(), oldest_ms: record.oldest() });
        }
        record.record(now_ms);
        Ok(WindowOutcome { allowed: true, count: record.count(), oldest_ms: record.oldest() })
    }

    async fn reset(&self, identifier: &str, action: &str) -> Result<(), RateLimitError> {
        self.records.lock().remove(&(identifier.to_string(), action.to_string()));
        Ok(())
    }

    async fn purge_idle(&self, now_ms: i64) -> Result<usize, RateLimitError> {
        let mut records = self.records.lock();
        let before = records.len();
        records.retain(|_, record| !record.is_idle(now_ms));
        Ok(before - records.len())
    }
}
