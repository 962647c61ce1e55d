use std::collections::{BTreeMap, VecDeque};
use crate::pool::enums::handle_state::HandleState;

#[derive(Debug)]
pub struct IdleConnection<C> {
    pub(crate) id: u64,
    pub(crate) connection: C,
    pub(crate) created_at: i64,
    pub(crate) last_used_at: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct HandleRecord {
    pub(crate) state: HandleState,
    pub(crate) created_at: i64,
    pub(crate) last_used_at: i64,
}

#[derive(Debug)]
pub struct PoolState<C> {
    /// Ordered by release time; the back is the most recently released.
    pub(crate) idle: VecDeque<IdleConnection<C>>,
    /// Every live handle, idle or checked out.
    pub(crate) handles: BTreeMap<u64, HandleRecord>,
}
