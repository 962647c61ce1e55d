//! Small cross-cutting helpers.

/// Sentry transaction helpers for trace-level diagnostics.
pub mod sentry_tracing;
