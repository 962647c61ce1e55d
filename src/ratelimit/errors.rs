use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateLimitError {
    #[error("Rate limit backend error: {0}")]
    Backend(String),

    #[error("Invalid rate limit arguments: {0}")]
    InvalidArguments(String),

    #[error("Unknown rate limit policy: {0}")]
    UnknownPolicy(String),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),
}
