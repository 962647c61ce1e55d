pub mod local_rate_limit_store;
pub mod rate_limit_decision;
pub mod rate_limiter;
pub mod rate_window_record;
pub mod redis_rate_limit_store;
