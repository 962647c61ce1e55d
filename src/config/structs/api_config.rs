use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub enabled: bool,
    pub bind_address: String,
    pub api_key: String,
    pub real_ip: String,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
    pub threads: u64,
    pub rate_limit_action: String,
    pub prometheus_id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_address: String::from("127.0.0.1:8080"),
            api_key: String::from("ChangeMeToASecureApiKey"),
            real_ip: String::from("X-Real-IP"),
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
            threads: 2,
            rate_limit_action: String::from("api"),
            prometheus_id: String::from("mentorship_gate"),
        }
    }
}
