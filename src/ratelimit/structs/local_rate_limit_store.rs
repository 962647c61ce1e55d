use std::collections::HashMap;
use parking_lot::Mutex;
use crate::ratelimit::structs::rate_window_record::RateWindowRecord;

#[derive(Debug, Default)]
pub struct LocalRateLimitStore {
    pub(crate) records: Mutex<HashMap<(String, String), RateWindowRecord>>,
}
