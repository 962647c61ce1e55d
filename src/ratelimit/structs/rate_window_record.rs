use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct RateWindowRecord {
    pub(crate) identifier: String,
    pub(crate) action: String,
    pub(crate) window_ms: i64,
    /// Ascending admission timestamps.
    pub(crate) events: VecDeque<i64>,
}
