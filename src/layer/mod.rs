//! Composition root.
//!
//! `PerformanceLayer` is built once at startup, shared by `Arc` with the HTTP
//! boundary and business logic, and shut down on exit. It owns one cache
//! coordinator, one rate limiter and one connection pool, all counting into a
//! single `StatsAtomics`.

pub mod impls;
pub mod structs;

#[cfg(test)]
mod tests;
