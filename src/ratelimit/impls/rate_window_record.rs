use std::collections::VecDeque;
use crate::ratelimit::structs::rate_window_record::RateWindowRecord;

impl RateWindowRecord {
    pub fn new(identifier: &str, action: &str, window_ms: i64) -> RateWindowRecord {
        RateWindowRecord {
            identifier: identifier.to_string(),
            action: action.to_string(),
            window_ms,
            events: VecDeque::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Removes events older than `now_ms - window_ms`.
    pub fn prune(&mut self, now_ms: i64) {
        let cutoff = now_ms - self.window_ms;
        while self.events.front().is_some_and(|event| *event < cutoff) {
            self.events.pop_front();
        }
    }

    pub fn count(&self) -> u64 {
        self.events.len() as u64
    }

    pub fn oldest(&self) -> Option<i64> {
        self.events.front().copied()
    }

    pub fn record(&mut self, now_ms: i64) {
        // Keep the log ascending even if the wall clock stepped back.
        let at = self.events.back().map_or(now_ms, |last| now_ms.max(*last));
        self.events.push_back(at);
    }

    pub fn is_idle(&self, now_ms: i64) -> bool {
        self.events.back().is_none_or(|last| *last < now_ms - self.window_ms)
    }
}
