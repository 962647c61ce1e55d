use crate::stats::structs::service_stats::ServiceStats;

pub fn prom_generate_line(id: &str, type_metric: &str, metric: &str, value: impl std::fmt::Display, without_header: bool, description: Option<&str>) -> String
{
    if without_header {
        format!(
            "# HELP {}_{} {}\n# TYPE {}_{} {}\n{}_{}{{metric=\"{}\"}} {}\n",
            id, type_metric, description.unwrap_or(""),
            id, type_metric, type_metric,
            id, type_metric, metric, value
        )
    } else {
        format!("{id}_{type_metric}{{metric=\"{metric}\"}} {value}\n")
    }
}

impl ServiceStats {
    /// Renders the snapshot in the Prometheus text exposition format.
    pub fn to_prometheus(&self, id: &str) -> String
    {
        let mut output = String::with_capacity(4096);
        let counters = &self.counters;

        output.push_str(&prom_generate_line(id, "gauge", "uptime_seconds", self.uptime_seconds, true, Some(&format!("{id} gauge metrics"))));
        output.push_str(&prom_generate_line(id, "gauge", "cache_hit_ratio", self.cache.hit_ratio, false, None));
        output.push_str(&prom_generate_line(id, "gauge", "cache_memory_items", self.cache.memory_items, false, None));
        output.push_str(&prom_generate_line(id, "gauge", "cache_memory_capacity", self.cache.memory_capacity, false, None));
        for tier in &self.cache.tiers {
            output.push_str(&prom_generate_line(id, "gauge", &format!("cache_{}_hit_ratio", tier.tier), tier.hit_ratio, false, None));
        }
        output.push_str(&prom_generate_line(id, "gauge", "pool_live", self.pool.live, false, None));
        output.push_str(&prom_generate_line(id, "gauge", "pool_idle", self.pool.idle, false, None));
        output.push_str(&prom_generate_line(id, "gauge", "pool_in_use", self.pool.in_use, false, None));
        output.push_str(&prom_generate_line(id, "gauge", "pool_waiting", self.pool.waiting, false, None));
        output.push_str(&prom_generate_line(id, "gauge", "pool_utilization", self.pool.utilization, false, None));
        output.push_str(&prom_generate_line(id, "gauge", "rate_limit_rejection_ratio", self.rate_limiter.rejection_ratio, false, None));

        let counter_lines: [(&str, i64); 33] = [
            ("memory_hits", counters.memory_hits),
            ("memory_misses", counters.memory_misses),
            ("memory_errors", counters.memory_errors),
            ("distributed_hits", counters.distributed_hits),
            ("distributed_misses", counters.distributed_misses),
            ("distributed_errors", counters.distributed_errors),
            ("durable_hits", counters.durable_hits),
            ("durable_misses", counters.durable_misses),
            ("durable_errors", counters.durable_errors),
            ("cache_sets", counters.cache_sets),
            ("cache_set_failures", counters.cache_set_failures),
            ("cache_tier_write_failures", counters.cache_tier_write_failures),
            ("cache_deletes", counters.cache_deletes),
            ("cache_promotions", counters.cache_promotions),
            ("cache_expired", counters.cache_expired),
            ("cache_corrupt", counters.cache_corrupt),
            ("cache_tag_writes", counters.cache_tag_writes),
            ("cache_tag_invalidations", counters.cache_tag_invalidations),
            ("cache_invalidated_keys", counters.cache_invalidated_keys),
            ("cache_producer_calls", counters.cache_producer_calls),
            ("rate_limit_checks", counters.rate_limit_checks),
            ("rate_limit_allowed", counters.rate_limit_allowed),
            ("rate_limit_rejected", counters.rate_limit_rejected),
            ("rate_limit_errors", counters.rate_limit_errors),
            ("pool_acquired", counters.pool_acquired),
            ("pool_created", counters.pool_created),
            ("pool_reused", counters.pool_reused),
            ("pool_released", counters.pool_released),
            ("pool_discarded", counters.pool_discarded),
            ("pool_reaped", counters.pool_reaped),
            ("pool_exhausted", counters.pool_exhausted),
            ("pool_connect_errors", counters.pool_connect_errors),
            ("pool_validation_failures", counters.pool_validation_failures),
        ];
        for (index, (metric, value)) in counter_lines.iter().enumerate() {
            let description = format!("{id} counter metrics");
            output.push_str(&prom_generate_line(id, "counter", metric, value, index == 0, if index == 0 { Some(description.as_str()) } else { None }));
        }
        for (action, rejected) in &self.rate_limiter.rejected_by_action {
            output.push_str(&prom_generate_line(id, "counter", &format!("rate_limit_rejected_{action}"), rejected, false, None));
        }
        output
    }
}
