use std::time::Duration;

/// Resolves a TTL for keys stored without an explicit one.
#[derive(Debug, Clone)]
pub struct TtlPolicy {
    pub(crate) default_ttl: Duration,
    /// Sorted by prefix length, longest first.
    pub(crate) rules: Vec<(String, Duration)>,
}
