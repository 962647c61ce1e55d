pub mod cache_tier;
