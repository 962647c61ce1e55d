#[cfg(test)]
mod layer_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use async_trait::async_trait;
    use crate::config::structs::configuration::Configuration;
    use crate::layer::structs::performance_layer::PerformanceLayer;
    use crate::pool::errors::PoolError;
    use crate::pool::traits::connection_factory::ConnectionFactory;

    struct SequenceFactory {
        next: AtomicUsize,
    }

    #[async_trait]
    impl ConnectionFactory for SequenceFactory {
        type Connection = usize;

        async fn connect(&self) -> Result<usize, PoolError> {
            Ok(self.next.fetch_add(1, Ordering::SeqCst))
        }

        async fn is_valid(&self, _connection: &mut usize) -> bool {
            true
        }

        async fn close(&self, _connection: usize) {}
    }

    async fn layer(dir: &tempfile::TempDir) -> PerformanceLayer<SequenceFactory> {
        let mut config = Configuration::init();
        config.cache.durable.path = dir.path().to_string_lossy().to_string();
        config.pool.min_size = 1;
        config.pool.max_size = 2;
        config.pool.drain_timeout = 1;
        PerformanceLayer::with_factory(Arc::new(config), SequenceFactory { next: AtomicUsize::new(0) })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_layer_wires_components() {
        let dir = tempfile::tempdir().unwrap();
        let layer = layer(&dir).await;
        assert_eq!(layer.rate_limiter.backend(), "local");
        assert_eq!(layer.pool.stats().live, 1);
        assert_eq!(layer.cache.tier_kinds().len(), 2);
    }

    #[tokio::test]
    async fn test_layer_operations_update_stats() {
        let dir = tempfile::tempdir().unwrap();
        let layer = layer(&dir).await;
        layer.set("mentor_1", b"m".to_vec(), None).await.unwrap();
        assert_eq!(layer.get("mentor_1").await, Some(b"m".to_vec()));
        assert!(layer.check_policy("10.0.0.1", "login").await.unwrap().allowed);
        let handle = layer.acquire_connection(None).await.unwrap();
        layer.release_connection(handle);

        let stats = layer.stats();
        assert_eq!(stats.counters.cache_sets, 1);
        assert_eq!(stats.cache.hits, 1);
        assert_eq!(stats.rate_limiter.checks, 1);
        assert_eq!(stats.counters.pool_acquired, 1);
        assert!(stats.uptime_seconds >= 0);
        assert!(stats.to_prometheus("gate").contains("gate_counter{metric=\"cache_sets\"} 1"));
    }

    #[tokio::test]
    async fn test_maintenance_and_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let layer = layer(&dir).await;
        layer.set("session_x", b"s".to_vec(), Some(Duration::from_millis(1))).await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        layer.run_maintenance().await;
        assert!(layer.stats().counters.cache_expired >= 1);
        assert_eq!(layer.shutdown().await, 0);
        assert!(matches!(layer.acquire_connection(None).await, Err(PoolError::PoolClosed)));
    }
}
