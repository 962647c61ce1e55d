use std::collections::{BTreeMap, VecDeque};
use crate::pool::enums::handle_state::HandleState;
use crate::pool::structs::pool_state::{HandleRecord, IdleConnection, PoolState};

impl<C> PoolState<C> {
    pub fn new() -> PoolState<C> {
        PoolState {
            idle: VecDeque::new(),
            handles: BTreeMap::new(),
        }
    }

    pub fn live(&self) -> usize {
        self.handles.len()
    }

    /// Takes the most recently released connection and marks it in use.
    pub fn checkout_idle(&mut self, now: i64) -> Option<IdleConnection<C>> {
        let idle = self.idle.pop_back()?;
        if let Some(record) = self.handles.get_mut(&idle.id) {
            record.state = HandleState::InUse;
            record.last_used_at = now;
        }
        Some(idle)
    }

    pub fn checkin(&mut self, id: u64, connection: C, created_at: i64, now: i64) {
        let record = self.handles.entry(id).or_insert(HandleRecord {
            state: HandleState::Idle,
            created_at,
            last_used_at: now,
        });
        record.state = HandleState::Idle;
        record.last_used_at = now;
        self.idle.push_back(IdleConnection { id, connection, created_at, last_used_at: now });
    }
}

impl<C> Default for PoolState<C> {
    fn default() -> Self {
        PoolState::new()
    }
}
