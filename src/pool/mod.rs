//! Bounded connection pool.
//!
//! `ConnectionPool` hands out at most `max_size` connections at once. Each
//! checked-out connection carries a semaphore permit, so the bound holds even
//! when callers are cancelled mid-acquire. Connections are created lazily by a
//! `ConnectionFactory`, reused most-recently-released first, and destroyed by
//! the idle reaper once unused for `idle_timeout` (never below `min_size`).
//!
//! Dropping a `PooledConnection` returns it to the pool.

pub mod enums;
pub mod errors;
pub mod impls;
pub mod structs;
pub mod traits;

#[cfg(test)]
mod tests;
