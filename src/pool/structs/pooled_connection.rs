use std::sync::Arc;
use tokio::sync::OwnedSemaphorePermit;
use crate::pool::structs::connection_pool::PoolInner;
use crate::pool::traits::connection_factory::ConnectionFactory;

/// A checked-out connection. Dropping it hands the connection back to its pool.
pub struct PooledConnection<F: ConnectionFactory> {
    pub(crate) id: u64,
    pub(crate) connection: Option<F::Connection>,
    pub(crate) created_at: i64,
    pub(crate) pool: Arc<PoolInner<F>>,
    pub(crate) permit: Option<OwnedSemaphorePermit>,
}
