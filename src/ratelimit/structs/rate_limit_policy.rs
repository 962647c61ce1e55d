use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub action: String,
    pub limit: u64,
    pub window: Duration,
}
