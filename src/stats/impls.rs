pub mod service_stats;
pub mod stats_atomics;
