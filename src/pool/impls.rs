pub mod connection_pool;
pub mod database_drivers;
pub mod pool_settings;
pub mod pool_state;
pub mod pooled_connection;
pub mod sqlx_connection_factory;
