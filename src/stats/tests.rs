#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::stats::impls::service_stats::prom_generate_line;
    use crate::stats::structs::stats_atomics::StatsAtomics;

    #[test]
    fn test_update_stats_increments_and_decrements() {
        let stats = StatsAtomics::new();
        assert_eq!(stats.update_stats(StatsEvent::CacheSets, 3), 3);
        assert_eq!(stats.update_stats(StatsEvent::CacheSets, -1), 2);
        assert_eq!(stats.get_stats().cache_sets, 2);
    }

    #[test]
    fn test_set_stats_overwrites() {
        let stats = StatsAtomics::new();
        stats.update_stats(StatsEvent::PoolReaped, 7);
        stats.set_stats(StatsEvent::PoolReaped, 1);
        assert_eq!(stats.get_stat(StatsEvent::PoolReaped), 1);
    }

    #[test]
    fn test_started_is_recorded() {
        let stats = StatsAtomics::new();
        assert!(stats.get_stats().started > 0);
    }

    #[test]
    fn test_concurrent_updates() {
        let stats = Arc::new(StatsAtomics::new());
        let handles: Vec<_> = (0..8).map(|_| {
            let stats = stats.clone();
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    stats.update_stats(StatsEvent::RateLimitChecks, 1);
                }
            })
        }).collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.get_stats().rate_limit_checks, 8000);
    }

    #[test]
    fn test_prom_generate_line_with_header() {
        let line = prom_generate_line("gate", "counter", "cache_sets", 5, true, Some("gate counter metrics"));
        assert!(line.starts_with("# HELP gate_counter gate counter metrics\n# TYPE gate_counter counter\n"));
        assert!(line.ends_with("gate_counter{metric=\"cache_sets\"} 5\n"));
    }

    #[test]
    fn test_prom_generate_line_without_header() {
        let line = prom_generate_line("gate", "gauge", "pool_live", 2, false, None);
        assert_eq!(line, "gate_gauge{metric=\"pool_live\"} 2\n");
    }
}
