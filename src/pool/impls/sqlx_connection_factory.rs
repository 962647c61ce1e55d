use std::str::FromStr;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use sqlx::any::AnyConnectOptions;
use sqlx::AnyConnection;
use sqlx::{ConnectOptions, Connection};
use crate::config::structs::pool_config::PoolConfig;
use crate::pool::enums::database_drivers::DatabaseDrivers;
use crate::pool::errors::PoolError;
use crate::pool::structs::sqlx_connection_factory::SqlxConnectionFactory;
use crate::pool::traits::connection_factory::ConnectionFactory;

impl SqlxConnectionFactory {
    pub fn new(engine: DatabaseDrivers, dsn: &str) -> Result<SqlxConnectionFactory, PoolError> {
        if !engine.matches_dsn(dsn) {
            return Err(PoolError::ConnectionError(format!(
                "DSN does not match engine {engine} (expected {})", engine.dsn_schemes().join(" or ")
            )));
        }
        sqlx::any::install_default_drivers();
        Ok(SqlxConnectionFactory { engine, dsn: dsn.to_string() })
    }

    pub fn from_config(config: &PoolConfig) -> Result<SqlxConnectionFactory, PoolError> {
        SqlxConnectionFactory::new(config.engine, &config.dsn)
    }

    pub fn engine(&self) -> DatabaseDrivers {
        self.engine
    }
}

#[async_trait]
impl ConnectionFactory for SqlxConnectionFactory {
    type Connection = AnyConnection;

    #[tracing::instrument(level = "debug", skip(self), fields(engine = %self.engine))]
    async fn connect(&self) -> Result<AnyConnection, PoolError> {
        let options = AnyConnectOptions::from_str(&self.dsn)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        Ok(options.connect().await?)
    }

    async fn is_valid(&self, connection: &mut AnyConnection) -> bool {
        connection.ping().await.is_ok()
    }

    async fn close(&self, connection: AnyConnection) {
        if let Err(e) = connection.close().await {
            debug!("[POOL] {} connection did not close cleanly: {e}", self.engine);
        }
    }
}
