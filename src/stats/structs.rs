//! Statistics data structures.

/// Aggregated snapshot returned by `PerformanceLayer::stats()`.
pub mod service_stats;

/// Snapshot of current statistics values.
pub mod stats;

/// Atomic counters for thread-safe statistics updates.
pub mod stats_atomics;
