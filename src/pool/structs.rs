pub mod connection_pool;
pub mod pool_handle_info;
pub mod pool_settings;
pub mod pool_state;
pub mod pool_stats;
pub mod pooled_connection;
pub mod sqlx_connection_factory;
