use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Pool exhausted: no connection released within {timeout:?}")]
    PoolExhausted { timeout: Duration },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Pool is closed")]
    PoolClosed,
}

impl From<sqlx::Error> for PoolError {
    fn from(error: sqlx::Error) -> Self {
        PoolError::ConnectionError(error.to_string())
    }
}
