use async_trait::async_trait;
use crate::pool::errors::PoolError;

/// Creates, checks and disposes of the connections a pool manages.
#[async_trait]
pub trait ConnectionFactory: Send + Sync + 'static {
    type Connection: Send + 'static;

    async fn connect(&self) -> Result<Self::Connection, PoolError>;

    /// Cheap liveness probe run before an idle connection is handed out.
    async fn is_valid(&self, connection: &mut Self::Connection) -> bool;

    async fn close(&self, connection: Self::Connection);
}
