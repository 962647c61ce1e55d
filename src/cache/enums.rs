pub mod cache_engine;
pub mod cache_tier_kind;
pub mod compression_algorithm;
