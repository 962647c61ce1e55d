/// Result of one store round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOutcome {
    pub allowed: bool,
    /// Events inside the window after this hit.
    pub count: u64,
    pub oldest_ms: Option<i64>,
}
