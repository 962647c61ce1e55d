//! Common utilities and shared functionality.
//!
//! Helpers used by every other module of the crate: logging setup, wall-clock
//! helpers expressed in unix milliseconds and the free-form `CustomError`
//! used while booting.

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

#[cfg(test)]
mod tests;
