use std::ops::{Deref, DerefMut};
use tokio::sync::OwnedSemaphorePermit;
use chrono::{DateTime, Utc};
use crate::common::common::{current_time_millis, millis_to_datetime};
use crate::pool::structs::pooled_connection::PooledConnection;
use crate::pool::traits::connection_factory::ConnectionFactory;
use crate::stats::enums::stats_event::StatsEvent;

const CONNECTION_TAKEN: &str = "pooled connection accessed after it was returned";

impl<F: ConnectionFactory> PooledConnection<F> {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn pool_id(&self) -> u64 {
        self.pool.pool_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        millis_to_datetime(self.created_at)
    }

    /// Removes the handle from its pool without returning the connection.
    pub(crate) fn detach(mut self) -> (Option<F::Connection>, Option<OwnedSemaphorePermit>) {
        self.pool.state.lock().handles.remove(&self.id);
        (self.connection.take(), self.permit.take())
    }
}

impl<F: ConnectionFactory> Deref for PooledConnection<F> {
    type Target = F::Connection;

    fn deref(&self) -> &Self::Target {
        self.connection.as_ref().expect(CONNECTION_TAKEN)
    }
}

impl<F: ConnectionFactory> DerefMut for PooledConnection<F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.connection.as_mut().expect(CONNECTION_TAKEN)
    }
}

impl<F: ConnectionFactory> Drop for PooledConnection<F> {
    fn drop(&mut self) {
        let Some(connection) = self.connection.take() else {
            return;
        };
        if self.pool.is_closed() {
            self.pool.state.lock().handles.remove(&self.id);
            self.pool.close_in_background(connection);
        } else {
            self.pool.state.lock().checkin(self.id, connection, self.created_at, current_time_millis());
        }
        self.pool.stats.update_stats(StatsEvent::PoolReleased, 1);
        // The connection is back in the idle list before its permit frees a waiter.
        drop(self.permit.take());
        self.pool.released.notify_waiters();
    }
}
