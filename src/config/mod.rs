//! Configuration management module.
//!
//! Loads, validates and saves the service configuration (`config.toml`).
//!
//! # Configuration Structure
//!
//! - **log_level** / **log_console_interval**: logging and the periodic stats line
//! - **cache**: memory, durable and distributed tiers plus the TTL policy table
//! - **rate_limiter**: key prefix, backend selection and named policies
//! - **pool**: backing-store driver, DSN and pool sizing
//! - **api**: administrative HTTP API
//! - **sentry**: error reporting
//!
//! # Example
//!
//! ```rust,ignore
//! use mentorship_gate::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! config.validate()?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
