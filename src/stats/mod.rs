//! Service-wide statistics.
//!
//! Every component of the layer counts its activity into one shared
//! `StatsAtomics` instance owned by the composition root. Counters are plain
//! atomics so hot paths never take a lock to record an event.
//!
//! # Statistics Categories
//!
//! - Cache: per-tier hits/misses/errors, sets, promotions, expiries, corrupt entries
//! - Rate limiter: checks, admissions, rejections, backend errors
//! - Pool: acquisitions, creations, reuse, reaping, exhaustion, connect errors
//!
//! Snapshots are exposed as JSON (`ServiceStats`) and Prometheus text.
//!
//! # Example
//!
//! ```rust,ignore
//! use mentorship_gate::stats::enums::stats_event::StatsEvent;
//!
//! stats.update_stats(StatsEvent::CacheSets, 1);
//! let snapshot = stats.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;

#[cfg(test)]
mod tests;
