#![allow(dead_code)]
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use tempfile::TempDir;
use mentorship_gate::config::structs::configuration::Configuration;
use mentorship_gate::layer::structs::performance_layer::PerformanceLayer;
use mentorship_gate::pool::errors::PoolError;
use mentorship_gate::pool::structs::pool_settings::PoolSettings;
use mentorship_gate::pool::traits::connection_factory::ConnectionFactory;

pub type TestLayer = Arc<PerformanceLayer<MockFactory>>;

#[derive(Default)]
pub struct MockCounters {
    pub opened: AtomicUsize,
    pub closed: AtomicUsize,
    pub refuse: AtomicBool,
}

/// Hands out numbered fake connections and records how many were opened and closed.
#[derive(Clone, Default)]
pub struct MockFactory {
    pub counters: Arc<MockCounters>,
}

#[async_trait]
impl ConnectionFactory for MockFactory {
    type Connection = usize;

    async fn connect(&self) -> Result<usize, PoolError> {
        if self.counters.refuse.load(Ordering::SeqCst) {
            return Err(PoolError::ConnectionError(String::from("database unreachable")));
        }
        Ok(self.counters.opened.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn is_valid(&self, _connection: &mut usize) -> bool {
        true
    }

    async fn close(&self, _connection: usize) {
        self.counters.closed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Defaults with the durable tier rooted in `dir` and the distributed tier off.
pub fn create_test_config(dir: &TempDir) -> Configuration {
    let mut config = Configuration::init();
    config.cache.durable.path = dir.path().join("cache").to_string_lossy().to_string();
    config.cache.distributed.enabled = false;
    config.pool.min_size = 0;
    config.pool.max_size = 3;
    config.pool.acquire_timeout = 1;
    config.pool.drain_timeout = 1;
    config.api.api_key = String::from("test-token");
    config
}

pub async fn create_test_layer(config: Configuration) -> (TestLayer, Arc<MockCounters>) {
    let factory = MockFactory::default();
    let counters = factory.counters.clone();
    let layer = PerformanceLayer::with_factory(Arc::new(config), factory)
        .await
        .expect("layer builds without external services");
    (Arc::new(layer), counters)
}

pub fn pool_settings(min_size: usize, max_size: usize, acquire_timeout: Duration) -> PoolSettings {
    PoolSettings {
        min_size,
        max_size,
        idle_timeout: Duration::from_millis(50),
        acquire_timeout,
        connect_timeout: Duration::from_secs(1),
        test_on_acquire: false,
    }
}
