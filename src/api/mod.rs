//! Administrative REST API.
//!
//! A small actix-web surface for operators of the layer.
//!
//! # Endpoints
//!
//! - `GET /api/stats` - service statistics as JSON
//! - `GET /api/metrics` - the same statistics in Prometheus text format
//! - `DELETE /api/cache/key/{key}` - drop one key from every tier
//! - `DELETE /api/cache/tag/{tag}` - invalidate every key carrying a tag
//! - `GET /api/pool` - pool counters and a snapshot of every live handle
//!
//! # Authentication
//!
//! Every endpoint requires the configured key as a query parameter:
//! `?token=<api_key>`. Requests are also admitted through the layer's own
//! rate limiter under the configured `rate_limit_action` policy.

/// Data structures for API service context.
pub mod structs;

/// Server setup, route table and shared request checks.
#[allow(clippy::module_inception)]
pub mod api;

/// Statistics and monitoring endpoints.
pub mod api_stats;

/// Cache invalidation endpoints.
pub mod api_cache;

/// Connection pool inspection endpoint.
pub mod api_pool;
