use chrono::{DateTime, Utc};
use crate::ratelimit::structs::rate_limit_decision::RateLimitDecision;

impl RateLimitDecision {
    /// Response headers for the HTTP boundary; `Retry-After` only on rejection.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("X-RateLimit-Limit", self.limit.to_string()),
            ("X-RateLimit-Remaining", self.remaining.to_string()),
            ("X-RateLimit-Reset", self.reset_at.timestamp().to_string()),
        ];
        if !self.allowed {
            headers.push(("Retry-After", self.retry_after_secs().to_string()));
        }
        headers
    }

    pub fn retry_after_secs(&self) -> u64 {
        self.retry_after_secs_at(Utc::now())
    }

    /// Whole seconds until `reset_at`, rounded up and never below one.
    pub fn retry_after_secs_at(&self, now: DateTime<Utc>) -> u64 {
        let millis = (self.reset_at - now).num_milliseconds().max(0) as u64;
        millis.div_ceil(1000).max(1)
    }
}
