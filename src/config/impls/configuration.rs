use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_config::ApiConfig;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::pool_config::PoolConfig;
use crate::config::structs::rate_limiter_config::RateLimiterConfig;
use crate::config::structs::sentry_config::SentryConfig;

const KEY_PREFIX_REGEX: &str = r"^[A-Za-z0-9_:\-.]{0,64}$";
const ACTION_REGEX: &str = r"^[a-z_][a-z0-9_]{0,63}$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            cache: CacheConfig::default(),
            rate_limiter: RateLimiterConfig::default(),
            pool: PoolConfig::default(),
            api: ApiConfig::default(),
            sentry: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} file, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        parse_log_level(self.log_level.as_str())
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;

        let mut check_map = vec![
            ("[CACHE] tag_prefix", self.cache.tag_prefix.clone(), KEY_PREFIX_REGEX),
            ("[CACHE] distributed prefix", self.cache.distributed.prefix.clone(), KEY_PREFIX_REGEX),
            ("[RATELIMIT] key_prefix", self.rate_limiter.key_prefix.clone(), KEY_PREFIX_REGEX),
            ("[API] rate_limit_action", self.api.rate_limit_action.clone(), ACTION_REGEX),
            ("[API] prometheus_id", self.api.prometheus_id.clone(), ACTION_REGEX),
        ];
        for policy in &self.rate_limiter.policies {
            check_map.push(("[RATELIMIT] policy action", policy.action.clone(), ACTION_REGEX));
        }
        for (name, value, regex) in check_map {
            Self::validate_value(name, &value, regex)?;
        }

        if self.cache.tag_prefix.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[CACHE] tag_prefix must not be empty")));
        }
        if self.cache.memory.max_items == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[CACHE] memory.max_items must be at least 1")));
        }
        if self.cache.durable.enabled && self.cache.durable.path.trim().is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[CACHE] durable.path must be set when the durable tier is enabled")));
        }
        if self.pool.max_size == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[POOL] max_size must be at least 1")));
        }
        if self.pool.min_size > self.pool.max_size {
            return Err(ConfigurationError::ValidationError(format!(
                "[POOL] min_size ({}) exceeds max_size ({})", self.pool.min_size, self.pool.max_size
            )));
        }
        for policy in &self.rate_limiter.policies {
            if policy.window == 0 {
                return Err(ConfigurationError::ValidationError(format!(
                    "[RATELIMIT] policy '{}' has a zero window", policy.action
                )));
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "Error checking {name} [:] Name: \"{value}\" [:] Regex: \"{regex_check}\""
            )));
        }
        Ok(())
    }
}
