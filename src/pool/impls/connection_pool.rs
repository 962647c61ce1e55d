use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use tokio::sync::{Notify, Semaphore};
use crate::common::common::{current_time_millis, duration_to_millis, millis_to_datetime};
use crate::pool::enums::handle_state::HandleState;
use crate::pool::errors::PoolError;
use crate::pool::structs::connection_pool::{ConnectionPool, PoolInner};
use crate::pool::structs::pool_handle_info::PoolHandleInfo;
use crate::pool::structs::pool_settings::PoolSettings;
use crate::pool::structs::pool_state::{HandleRecord, PoolState};
use crate::pool::structs::pool_stats::PoolStats;
use crate::pool::structs::pooled_connection::PooledConnection;
use crate::pool::traits::connection_factory::ConnectionFactory;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

static POOL_IDS: AtomicU64 = AtomicU64::new(1);

/// Counts a caller as waiting for as long as it is alive.
struct WaitGuard<'a>(&'a AtomicUsize);

impl<'a> WaitGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> WaitGuard<'a> {
        counter.fetch_add(1, Ordering::SeqCst);
        WaitGuard(counter)
    }
}

impl Drop for WaitGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<F: ConnectionFactory> PoolInner<F> {
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn count(&self, event: StatsEvent) {
        self.stats.update_stats(event, 1);
    }

    /// Closes outside of the caller, since `Drop` cannot await.
    pub(crate) fn close_in_background(self: &Arc<Self>, connection: F::Connection) {
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let inner = self.clone();
                runtime.spawn(async move {
                    inner.factory.close(connection).await;
                });
            }
            Err(_) => drop(connection),
        }
    }

    async fn open(&self) -> Result<F::Connection, PoolError> {
        match tokio::time::timeout(self.settings.connect_timeout, self.factory.connect()).await {
            Ok(Ok(connection)) => Ok(connection),
            Ok(Err(e)) => {
                self.count(StatsEvent::PoolConnectErrors);
                error!("[POOL] Failed to open connection: {e}");
                Err(e)
            }
            Err(_) => {
                self.count(StatsEvent::PoolConnectErrors);
                error!("[POOL] Opening a connection timed out after {:?}", self.settings.connect_timeout);
                Err(PoolError::ConnectionError(format!("connect timed out after {:?}", self.settings.connect_timeout)))
            }
        }
    }
}

impl<F: ConnectionFactory> Clone for ConnectionPool<F> {
    fn clone(&self) -> Self {
        ConnectionPool { inner: self.inner.clone() }
    }
}

impl<F: ConnectionFactory> ConnectionPool<F> {
    pub fn new(factory: F, settings: PoolSettings, stats: Arc<StatsAtomics>) -> ConnectionPool<F> {
        let max_size = settings.max_size;
        ConnectionPool {
            inner: Arc::new(PoolInner {
                pool_id: POOL_IDS.fetch_add(1, Ordering::Relaxed),
                factory,
                settings,
                semaphore: Arc::new(Semaphore::new(max_size)),
                state: Mutex::new(PoolState::new()),
                next_handle: AtomicU64::new(1),
                waiting: AtomicUsize::new(0),
                closed: AtomicBool::new(false),
                released: Notify::new(),
                stats,
            }),
        }
    }

    pub fn id(&self) -> u64 {
        self.inner.pool_id
    }

    pub fn settings(&self) -> &PoolSettings {
        &self.inner.settings
    }

    pub fn factory(&self) -> &F {
        &self.inner.factory
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    /// Checks out a connection, waiting up to `timeout` for one to be released.
    ///
    /// Idle connections are reused most recently released first. A new one is
    /// opened only when none is idle; fewer than `max_size` are then checked out
    /// because the caller already holds a permit.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn acquire(&self, timeout: Duration) -> Result<PooledConnection<F>, PoolError> {
        let inner = &self.inner;
        if inner.is_closed() {
            return Err(PoolError::PoolClosed);
        }

        let permit = {
            let _waiting = WaitGuard::enter(&inner.waiting);
            match tokio::time::timeout(timeout, inner.semaphore.clone().acquire_owned()).await {
                Ok(Ok(permit)) => permit,
                Ok(Err(_)) => return Err(PoolError::PoolClosed),
                Err(_) => {
                    inner.count(StatsEvent::PoolExhausted);
                    warn!("[POOL] No connection released within {timeout:?}");
                    return Err(PoolError::PoolExhausted { timeout });
                }
            }
        };
        if inner.is_closed() {
            return Err(PoolError::PoolClosed);
        }

        let mut permit = Some(permit);
        loop {
            let Some(idle) = inner.state.lock().checkout_idle(current_time_millis()) else {
                break;
            };
            let mut handle = PooledConnection {
                id: idle.id,
                connection: Some(idle.connection),
                created_at: idle.created_at,
                pool: inner.clone(),
                permit: permit.take(),
            };
            if !inner.settings.test_on_acquire || inner.factory.is_valid(&mut *handle).await {
                inner.count(StatsEvent::PoolReused);
                inner.count(StatsEvent::PoolAcquired);
                return Ok(handle);
            }
            inner.count(StatsEvent::PoolValidationFailures);
            inner.count(StatsEvent::PoolDiscarded);
            warn!("[POOL] Handle {} failed validation, discarding", handle.id);
            let (connection, returned) = handle.detach();
            permit = returned;
            if let Some(connection) = connection {
                inner.factory.close(connection).await;
            }
        }

        let connection = inner.open().await?;
        let id = inner.next_handle.fetch_add(1, Ordering::SeqCst);
        let now = current_time_millis();
        inner.state.lock().handles.insert(id, HandleRecord {
            state: HandleState::InUse,
            created_at: now,
            last_used_at: now,
        });
        inner.count(StatsEvent::PoolCreated);
        inner.count(StatsEvent::PoolAcquired);
        debug!("[POOL] Opened handle {id}");
        Ok(PooledConnection {
            id,
            connection: Some(connection),
            created_at: now,
            pool: inner.clone(),
            permit,
        })
    }

    /// Returns a handle; one from another pool goes back to its own pool.
    pub fn release(&self, handle: PooledConnection<F>) {
        if handle.pool_id() != self.id() {
            warn!("[POOL] Handle {} belongs to pool {}, not {}", handle.id(), handle.pool_id(), self.id());
        }
        drop(handle);
    }

    /// Destroys a handle whose connection is known to be broken.
    pub async fn discard(&self, handle: PooledConnection<F>) {
        let owner = handle.pool.clone();
        let id = handle.id();
        let (connection, permit) = handle.detach();
        owner.count(StatsEvent::PoolDiscarded);
        if let Some(connection) = connection {
            owner.factory.close(connection).await;
        }
        drop(permit);
        owner.released.notify_waiters();
        debug!("[POOL] Discarded handle {id}");
    }

    /// Opens idle connections until `min_size` are live.
    pub async fn warm_up(&self) -> Result<usize, PoolError> {
        let inner = &self.inner;
        let mut opened = 0;
        while !inner.is_closed() && inner.state.lock().live() < inner.settings.min_size {
            let Ok(permit) = inner.semaphore.clone().try_acquire_owned() else {
                break;
            };
            let connection = inner.open().await?;
            let now = current_time_millis();
            let surplus = {
                let mut state = inner.state.lock();
                if state.live() >= inner.settings.max_size {
                    Some(connection)
                } else {
                    let id = inner.next_handle.fetch_add(1, Ordering::SeqCst);
                    state.checkin(id, connection, now, now);
                    None
                }
            };
            drop(permit);
            if let Some(connection) = surplus {
                inner.factory.close(connection).await;
                break;
            }
            inner.count(StatsEvent::PoolCreated);
            opened += 1;
        }
        if opened > 0 {
            info!("[POOL] Warmed up {opened} connections");
        }
        Ok(opened)
    }

    /// Closes idle connections unused for `idle_timeout`, keeping `min_size` live.
    pub async fn reap_idle(&self) -> usize {
        let inner = &self.inner;
        let now = current_time_millis();
        let idle_timeout = duration_to_millis(inner.settings.idle_timeout);
        let reaped = {
            let mut state = inner.state.lock();
            let mut reaped = Vec::new();
            while state.live() > inner.settings.min_size {
                let stale = state.idle.front().is_some_and(|idle| now - idle.last_used_at >= idle_timeout);
                if !stale {
                    break;
                }
                if let Some(idle) = state.idle.pop_front() {
                    state.handles.remove(&idle.id);
                    reaped.push(idle);
                }
            }
            reaped
        };
        let count = reaped.len();
        for idle in reaped {
            debug!("[POOL] Reaping handle {}", idle.id);
            inner.factory.close(idle.connection).await;
        }
        if count > 0 {
            inner.stats.update_stats(StatsEvent::PoolReaped, count as i64);
            info!("[POOL] Reaped {count} idle connections");
        }
        count
    }

    /// Stops handing out connections, closes idle ones and waits up to
    /// `drain_timeout` for checked-out handles. Returns how many are still out.
    pub async fn close(&self, drain_timeout: Duration) -> usize {
        let inner = &self.inner;
        inner.closed.store(true, Ordering::SeqCst);
        inner.semaphore.close();

        let idle: Vec<_> = {
            let mut state = inner.state.lock();
            let drained: Vec<_> = state.idle.drain(..).collect();
            for connection in &drained {
                state.handles.remove(&connection.id);
            }
            drained
        };
        for connection in idle {
            inner.factory.close(connection.connection).await;
        }

        let deadline = tokio::time::Instant::now() + drain_timeout;
        loop {
            let released = inner.released.notified();
            let outstanding = inner.state.lock().live();
            if outstanding == 0 {
                info!("[POOL] Closed");
                return 0;
            }
            if tokio::time::timeout_at(deadline, released).await.is_err() {
                warn!("[POOL] Closed with {outstanding} handles still checked out");
                return outstanding;
            }
        }
    }

    pub fn stats(&self) -> PoolStats {
        let (live, idle) = {
            let state = self.inner.state.lock();
            (state.live(), state.idle.len())
        };
        let in_use = live.saturating_sub(idle);
        let max_size = self.inner.settings.max_size;
        PoolStats {
            max_size,
            min_size: self.inner.settings.min_size,
            live,
            idle,
            in_use,
            waiting: self.inner.waiting.load(Ordering::SeqCst),
            utilization: if max_size == 0 { 0.0 } else { in_use as f64 / max_size as f64 },
            closed: self.is_closed(),
        }
    }

    pub fn handles(&self) -> Vec<PoolHandleInfo> {
        self.inner.state.lock().handles.iter().map(|(id, record)| PoolHandleInfo {
            id: *id,
            state: record.state,
            created_at: millis_to_datetime(record.created_at),
            last_used_at: millis_to_datetime(record.last_used_at),
        }).collect()
    }
}
