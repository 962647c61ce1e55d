use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TtlRuleConfig {
    pub prefix: String,
    pub ttl: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TtlPolicyConfig {
    pub default_ttl: u64,
    pub rules: Vec<TtlRuleConfig>,
}

impl Default for TtlPolicyConfig {
    fn default() -> Self {
        let rule = |prefix: &str, ttl: u64| TtlRuleConfig { prefix: prefix.to_string(), ttl };
        Self {
            default_ttl: 900,
            rules: vec![
                rule("user_profile_", 3600),
                rule("mentor_", 1800),
                rule("session_", 900),
                rule("search_", 300),
                rule("static_", 86400),
                rule("categories_", 86400),
                rule("skills_", 86400),
            ],
        }
    }
}
