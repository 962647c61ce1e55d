//! Shared data context for API request handlers.

use std::sync::Arc;
use crate::config::structs::api_config::ApiConfig;
use crate::layer::structs::performance_layer::PerformanceLayer;
use crate::pool::structs::sqlx_connection_factory::SqlxConnectionFactory;
use crate::pool::traits::connection_factory::ConnectionFactory;

/// Shared application data available to all API request handlers.
///
/// Injected into actix-web's application data; both fields are `Arc`s so
/// every worker thread sees the same layer.
pub struct ApiServiceData<F: ConnectionFactory = SqlxConnectionFactory> {
    /// The layer the endpoints inspect and operate on.
    pub layer: Arc<PerformanceLayer<F>>,

    /// Configuration for this API server instance.
    pub api_config: Arc<ApiConfig>,
}
