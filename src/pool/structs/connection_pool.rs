use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize};
use std::sync::Arc;
use parking_lot::Mutex;
use tokio::sync::{Notify, Semaphore};
use crate::pool::structs::pool_settings::PoolSettings;
use crate::pool::structs::pool_state::PoolState;
use crate::pool::traits::connection_factory::ConnectionFactory;
use crate::stats::structs::stats_atomics::StatsAtomics;

pub struct ConnectionPool<F: ConnectionFactory> {
    pub(crate) inner: Arc<PoolInner<F>>,
}

pub struct PoolInner<F: ConnectionFactory> {
    pub(crate) pool_id: u64,
    pub(crate) factory: F,
    pub(crate) settings: PoolSettings,
    /// One permit per connection that may be checked out.
    pub(crate) semaphore: Arc<Semaphore>,
    pub(crate) state: Mutex<PoolState<F::Connection>>,
    pub(crate) next_handle: AtomicU64,
    pub(crate) waiting: AtomicUsize,
    pub(crate) closed: AtomicBool,
    pub(crate) released: Notify,
    pub(crate) stats: Arc<StatsAtomics>,
}
