#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::cache::enums::cache_engine::CacheEngine;
        use crate::cache::enums::compression_algorithm::CompressionAlgorithm;
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;
        use crate::pool::enums::database_drivers::DatabaseDrivers;

        #[test]
        fn test_init_defaults_are_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
            assert_eq!(config.cache.memory.max_items, 1000);
            assert_eq!(config.cache.distributed.engine, CacheEngine::redis);
            assert_eq!(config.cache.durable.compression, CompressionAlgorithm::lz4);
            assert_eq!(config.pool.engine, DatabaseDrivers::sqlite3);
        }

        #[test]
        fn test_toml_roundtrip_preserves_sections() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded.cache.ttl_policy.rules, config.cache.ttl_policy.rules);
            assert_eq!(loaded.rate_limiter.policies, config.rate_limiter.policies);
            assert_eq!(loaded.pool.max_size, config.pool.max_size);
        }

        #[test]
        fn test_partial_file_uses_section_defaults() {
            let data = br#"
log_level = "debug"

[cache.memory]
max_items = 2

[pool]
max_size = 3
"#;
            let config = Configuration::load(data).unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.cache.memory.max_items, 2);
            assert_eq!(config.cache.tag_prefix, "tag:");
            assert_eq!(config.pool.max_size, 3);
            assert_eq!(config.pool.min_size, 1);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validate_rejects_zero_memory_capacity() {
            let mut config = Configuration::init();
            config.cache.memory.max_items = 0;
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_validate_rejects_min_above_max() {
            let mut config = Configuration::init();
            config.pool.min_size = 5;
            config.pool.max_size = 2;
            let error = config.validate().unwrap_err();
            assert!(error.to_string().contains("min_size"));
        }

        #[test]
        fn test_validate_rejects_bad_prefix() {
            let mut config = Configuration::init();
            config.rate_limiter.key_prefix = String::from("rate limit ");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("loud");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_load_file_missing() {
            let result = Configuration::load_file("/nonexistent/definitely/missing.toml");
            assert!(matches!(result, Err(ConfigurationError::IOError(_))));
        }
    }
}
