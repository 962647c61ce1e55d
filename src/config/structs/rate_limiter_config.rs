use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RateLimitPolicyConfig {
    pub action: String,
    pub limit: u64,
    pub window: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RateLimiterConfig {
    pub key_prefix: String,
    pub use_distributed: bool,
    pub cleanup_interval: u64,
    pub policies: Vec<RateLimitPolicyConfig>,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        let policy = |action: &str, limit: u64, window: u64| RateLimitPolicyConfig { action: action.to_string(), limit, window };
        Self {
            key_prefix: String::from("ratelimit:"),
            use_distributed: true,
            cleanup_interval: 60,
            policies: vec![
                policy("login", 5, 900),
                policy("register", 3, 3600),
                policy("password_reset", 3, 3600),
                policy("message", 30, 60),
                policy("booking", 10, 3600),
                policy("upload", 20, 3600),
                policy("api", 600, 60),
            ],
        }
    }
}
