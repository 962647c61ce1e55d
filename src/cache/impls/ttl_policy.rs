use std::time::Duration;
use crate::cache::structs::ttl_policy::TtlPolicy;
use crate::config::structs::ttl_policy_config::TtlPolicyConfig;

impl TtlPolicy {
    pub fn new(default_ttl: Duration, rules: Vec<(String, Duration)>) -> TtlPolicy {
        let mut rules = rules;
        rules.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        TtlPolicy { default_ttl, rules }
    }

    pub fn from_config(config: &TtlPolicyConfig) -> TtlPolicy {
        TtlPolicy::new(
            Duration::from_secs(config.default_ttl),
            config.rules.iter()
                .map(|rule| (rule.prefix.clone(), Duration::from_secs(rule.ttl)))
                .collect(),
        )
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Longest matching prefix wins; an explicit TTL always takes precedence.
    pub fn resolve(&self, key: &str, ttl: Option<Duration>) -> Duration {
        if let Some(ttl) = ttl {
            return ttl;
        }
        self.rules.iter()
            .find(|(prefix, _)| key.starts_with(prefix.as_str()))
            .map(|(_, ttl)| *ttl)
            .unwrap_or(self.default_ttl)
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        TtlPolicy::from_config(&TtlPolicyConfig::default())
    }
}
