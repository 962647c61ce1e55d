#[cfg(test)]
mod pool_tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use async_trait::async_trait;
    use crate::pool::enums::handle_state::HandleState;
    use crate::pool::errors::PoolError;
    use crate::pool::structs::connection_pool::ConnectionPool;
    use crate::pool::structs::pool_settings::PoolSettings;
    use crate::pool::traits::connection_factory::ConnectionFactory;
    use crate::stats::structs::stats_atomics::StatsAtomics;

    #[derive(Default)]
    struct CountingFactory {
        opened: AtomicUsize,
        closed: AtomicUsize,
        refuse: AtomicBool,
        invalid: AtomicBool,
    }

    #[async_trait]
    impl ConnectionFactory for Arc<CountingFactory> {
        type Connection = usize;

        async fn connect(&self) -> Result<usize, PoolError> {
            if self.refuse.load(Ordering::SeqCst) {
                return Err(PoolError::ConnectionError("refused".to_string()));
            }
            Ok(self.opened.fetch_add(1, Ordering::SeqCst) + 1)
        }

        async fn is_valid(&self, _connection: &mut usize) -> bool {
            !self.invalid.load(Ordering::SeqCst)
        }

        async fn close(&self, _connection: usize) {
            self.closed.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn settings(min_size: usize, max_size: usize) -> PoolSettings {
        PoolSettings {
            min_size,
            max_size,
            idle_timeout: Duration::from_millis(50),
            acquire_timeout: Duration::from_millis(200),
            connect_timeout: Duration::from_secs(1),
            test_on_acquire: true,
        }
    }

    fn pool(min_size: usize, max_size: usize) -> (ConnectionPool<Arc<CountingFactory>>, Arc<CountingFactory>) {
        let factory = Arc::new(CountingFactory::default());
        (ConnectionPool::new(factory.clone(), settings(min_size, max_size), Arc::new(StatsAtomics::new())), factory)
    }

    #[tokio::test]
    async fn test_connections_are_created_lazily_and_reused() {
        let (pool, factory) = pool(0, 3);
        assert_eq!(pool.stats().live, 0);
        let first = pool.acquire(Duration::from_millis(50)).await.unwrap();
        let id = first.id();
        pool.release(first);
        let again = pool.acquire(Duration::from_millis(50)).await.unwrap();
        assert_eq!(again.id(), id);
        assert_eq!(factory.opened.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_most_recently_released_is_reused_first() {
        let (pool, _) = pool(0, 3);
        let a = pool.acquire(Duration::from_millis(50)).await.unwrap();
        let b = pool.acquire(Duration::from_millis(50)).await.unwrap();
        let b_id = b.id();
        drop(a);
        drop(b);
        assert_eq!(pool.acquire(Duration::from_millis(50)).await.unwrap().id(), b_id);
    }

    #[tokio::test]
    async fn test_exhausted_pool_times_out() {
        let (pool, _) = pool(0, 1);
        let _held = pool.acquire(Duration::from_millis(50)).await.unwrap();
        let result = pool.acquire(Duration::from_millis(30)).await;
        assert!(matches!(result, Err(PoolError::PoolExhausted { timeout }) if timeout == Duration::from_millis(30)));
        assert_eq!(pool.stats().waiting, 0);
    }

    #[tokio::test]
    async fn test_release_wakes_waiter() {
        let (pool, _) = pool(0, 1);
        let held = pool.acquire(Duration::from_millis(50)).await.unwrap();
        let waiter = {
            let pool = pool.clone();
            tokio::spawn(async move { pool.acquire(Duration::from_secs(2)).await.map(|handle| handle.id()) })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(pool.stats().waiting, 1);
        let id = held.id();
        pool.release(held);
        assert_eq!(waiter.await.unwrap().unwrap(), id);
    }

    #[tokio::test]
    async fn test_connect_failure_releases_slot() {
        let (pool, factory) = pool(0, 1);
        factory.refuse.store(true, Ordering::SeqCst);
        assert!(matches!(pool.acquire(Duration::from_millis(50)).await, Err(PoolError::ConnectionError(_))));
        factory.refuse.store(false, Ordering::SeqCst);
        assert!(pool.acquire(Duration::from_millis(50)).await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_idle_connection_is_replaced() {
        let (pool, factory) = pool(0, 2);
        let first = pool.acquire(Duration::from_millis(50)).await.unwrap();
        let first_id = first.id();
        drop(first);
        factory.invalid.store(true, Ordering::SeqCst);
        let second = pool.acquire(Duration::from_millis(50)).await.unwrap();
        assert_ne!(second.id(), first_id);
        assert_eq!(factory.closed.load(Ordering::SeqCst), 1);
        assert_eq!(pool.stats().live, 1);
    }

    #[tokio::test]
    async fn test_discard_frees_slot() {
        let (pool, factory) = pool(0, 1);
        let handle = pool.acquire(Duration::from_millis(50)).await.unwrap();
        pool.discard(handle).await;
        assert_eq!(factory.closed.load(Ordering::SeqCst), 1);
        assert_eq!(pool.stats().live, 0);
        assert!(pool.acquire(Duration::from_millis(50)).await.is_ok());
    }

    #[tokio::test]
    async fn test_handle_from_other_pool_returns_home() {
        let (home, _) = pool(0, 1);
        let (other, _) = pool(0, 1);
        let handle = home.acquire(Duration::from_millis(50)).await.unwrap();
        other.release(handle);
        assert_eq!(home.stats().idle, 1);
        assert_eq!(other.stats().live, 0);
    }

    #[tokio::test]
    async fn test_deref_reaches_connection() {
        let (pool, _) = pool(0, 1);
        let mut handle = pool.acquire(Duration::from_millis(50)).await.unwrap();
        assert_eq!(*handle, 1);
        *handle = 7;
        drop(handle);
        assert_eq!(*pool.acquire(Duration::from_millis(50)).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_reaper_honours_min_size() {
        let (pool, factory) = pool(1, 3);
        let handles = vec![
            pool.acquire(Duration::from_millis(50)).await.unwrap(),
            pool.acquire(Duration::from_millis(50)).await.unwrap(),
            pool.acquire(Duration::from_millis(50)).await.unwrap(),
        ];
        drop(handles);
        assert_eq!(pool.reap_idle().await, 0);
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(pool.reap_idle().await, 2);
        assert_eq!(pool.stats().live, 1);
        assert_eq!(factory.closed.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_warm_up_opens_min_size() {
        let (pool, _) = pool(2, 3);
        assert_eq!(pool.warm_up().await.unwrap(), 2);
        assert_eq!(pool.warm_up().await.unwrap(), 0);
        let stats = pool.stats();
        assert_eq!(stats.live, 2);
        assert_eq!(stats.idle, 2);
    }

    #[tokio::test]
    async fn test_handles_snapshot() {
        let (pool, _) = pool(0, 2);
        let held = pool.acquire(Duration::from_millis(50)).await.unwrap();
        drop(pool.acquire(Duration::from_millis(50)).await.unwrap());
        let handles = pool.handles();
        assert_eq!(handles.len(), 2);
        assert!(handles.iter().any(|handle| handle.id == held.id() && handle.state == HandleState::InUse));
        assert!(handles.iter().any(|handle| handle.state == HandleState::Idle));
        let stats = pool.stats();
        assert_eq!(stats.in_use, 1);
        assert!((stats.utilization - 0.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_close_drains_outstanding_handles() {
        let (pool, factory) = pool(0, 2);
        let held = pool.acquire(Duration::from_millis(50)).await.unwrap();
        drop(pool.acquire(Duration::from_millis(50)).await.unwrap());

        let closer = {
            let pool = pool.clone();
            tokio::spawn(async move { pool.close(Duration::from_secs(2)).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(matches!(pool.acquire(Duration::from_millis(10)).await, Err(PoolError::PoolClosed)));
        drop(held);
        assert_eq!(closer.await.unwrap(), 0);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(factory.closed.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_close_reports_stuck_handles() {
        let (pool, _) = pool(0, 1);
        let _held = pool.acquire(Duration::from_millis(50)).await.unwrap();
        assert_eq!(pool.close(Duration::from_millis(20)).await, 1);
    }

    #[tokio::test]
    async fn test_sqlite_factory_round_trip() {
        use crate::pool::enums::database_drivers::DatabaseDrivers;
        use crate::pool::structs::sqlx_connection_factory::SqlxConnectionFactory;

        assert!(SqlxConnectionFactory::new(DatabaseDrivers::mysql, "sqlite::memory:").is_err());
        let factory = SqlxConnectionFactory::new(DatabaseDrivers::sqlite3, "sqlite::memory:").unwrap();
        let mut connection = factory.connect().await.unwrap();
        assert!(factory.is_valid(&mut connection).await);
        factory.close(connection).await;
    }
}
