use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::pool::enums::handle_state::HandleState;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PoolHandleInfo {
    pub id: u64,
    pub state: HandleState,
    pub created_at: DateTime<Utc>,
    pub last_used_at: DateTime<Utc>,
}
