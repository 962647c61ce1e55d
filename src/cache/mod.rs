//! Multi-tier cache.
//!
//! A single `CacheCoordinator` fronts up to three tiers, probed fastest first:
//!
//! - **Memory**: bounded in-process map with FIFO eviction
//! - **Distributed**: optional Redis or Memcache store shared between instances
//! - **Durable**: disk segment, one file per key, addressed by the key's SHA-1
//!
//! # Architecture
//!
//! Every tier implements the `CacheTier` trait. The coordinator owns the lookup
//! order, promotes entries found in lower tiers into the faster ones, resolves
//! TTLs through a prefix policy table and maintains tag indexes so a group of
//! keys can be invalidated at once.
//!
//! Failures of the distributed or durable tier never reach the caller: they
//! are logged, counted and the coordinator carries on with the remaining tiers.
//!
//! # Example
//!
//! ```rust,ignore
//! let value = coordinator.remember("mentor_17", None, || async {
//!     load_mentor_from_database(17).await
//! }).await?;
//! coordinator.invalidate_tag("mentor:17").await;
//! ```

/// Cache engine, tier kind and compression enumerations.
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for tiers and the coordinator.
pub mod impls;

/// Data structures for entries, tiers and the coordinator.
pub mod structs;

/// Tier trait definitions.
pub mod traits;
