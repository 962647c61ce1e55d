//! # Mentorship Gate
//!
//! The performance layer of the mentorship booking service: a multi-tier
//! cache, a sliding-window rate limiter and a bounded connection pool,
//! owned by one composition root that is built at start-up and shared by `Arc`.
//!
//! ## Overview
//!
//! - **Cache**: lookups go Memory → Distributed (Redis or Memcache) → Durable
//!   (disk), hits are promoted into the faster tiers, TTLs come from a
//!   key-prefix policy and keys can be grouped by tags for bulk invalidation.
//! - **Rate limiting**: per `(identifier, action)` sliding windows, kept in
//!   Redis through an atomic Lua script when available, in process otherwise.
//! - **Connection pool**: lazily created connections up to `max_size`,
//!   blocking acquisition with a timeout, idle reaping down to `min_size`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mentorship_gate::config::structs::configuration::Configuration;
//! use mentorship_gate::layer::structs::performance_layer::PerformanceLayer;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let layer = PerformanceLayer::new(config).await?;
//!
//! let mentors = layer.remember("mentors:featured", None, || async {
//!     load_featured_mentors().await
//! }).await?;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - administrative REST API
//! - [`cache`] - cache tiers and the coordinator
//! - [`common`] - logging setup, time helpers and the shared error type
//! - [`config`] - TOML configuration
//! - [`layer`] - the composition root
//! - [`pool`] - the connection pool
//! - [`ratelimit`] - the sliding-window rate limiter
//! - [`stats`] - counters and their JSON/Prometheus views
//! - [`structs`] - CLI arguments

/// Administrative REST API.
///
/// Statistics, Prometheus metrics, cache invalidation and pool inspection,
/// protected by an API token and by the layer's own rate limiter.
pub mod api;

/// Multi-tier cache.
///
/// Memory, distributed (Redis/Memcache) and durable tiers behind one
/// coordinator with promotion, TTL policy and tag invalidation.
pub mod cache;

/// Common utilities and shared functionality.
///
/// Logging setup, time conversions and the crate-wide `CustomError`.
pub mod common;

/// Configuration management module.
///
/// Loads, validates and writes the TOML configuration file.
pub mod config;

/// Composition root owning one instance of every component.
pub mod layer;

/// Bounded connection pool with blocking acquisition and idle reaping.
pub mod pool;

/// Sliding-window rate limiter with Redis and in-process stores.
pub mod ratelimit;

/// Statistics tracking and monitoring module.
///
/// Atomic counters shared by every component, plus the JSON snapshot and
/// Prometheus export served by the API.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Sentry tracing helpers.
pub mod utils;
