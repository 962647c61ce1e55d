//! Sliding-window rate limiting.
//!
//! Every `(identifier, action)` pair owns a log of admission timestamps. A check
//! prunes events older than the window, rejects when the remaining count has
//! reached the limit and otherwise records the current instant.
//!
//! Two stores implement `RateLimitStore`:
//!
//! - `RedisRateLimitStore`: one sorted set per pair, updated by a single Lua
//!   script so the prune, count and record steps are atomic across instances
//! - `LocalRateLimitStore`: process-local map behind a mutex, used when no Redis
//!   backend is configured or reachable
//!
//! A rejection is a normal `RateLimitDecision` with `allowed == false`; only
//! store failures and invalid arguments surface as `RateLimitError`.

pub mod errors;
pub mod impls;
pub mod structs;
pub mod traits;

#[cfg(test)]
mod tests;
