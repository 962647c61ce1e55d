use std::fmt;
use crate::cache::enums::cache_tier_kind::CacheTierKind;
use crate::stats::enums::stats_event::StatsEvent;

impl fmt::Display for CacheTierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CacheTierKind {
    pub const ALL: [CacheTierKind; 3] = [CacheTierKind::memory, CacheTierKind::distributed, CacheTierKind::durable];

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheTierKind::memory => "memory",
            CacheTierKind::distributed => "distributed",
            CacheTierKind::durable => "durable",
        }
    }

    pub fn hit_event(&self) -> StatsEvent {
        match self {
            CacheTierKind::memory => StatsEvent::MemoryHits,
            CacheTierKind::distributed => StatsEvent::DistributedHits,
            CacheTierKind::durable => StatsEvent::DurableHits,
        }
    }

    pub fn miss_event(&self) -> StatsEvent {
        match self {
            CacheTierKind::memory => StatsEvent::MemoryMisses,
            CacheTierKind::distributed => StatsEvent::DistributedMisses,
            CacheTierKind::durable => StatsEvent::DurableMisses,
        }
    }

    pub fn error_event(&self) -> StatsEvent {
        match self {
            CacheTierKind::memory => StatsEvent::MemoryErrors,
            CacheTierKind::distributed => StatsEvent::DistributedErrors,
            CacheTierKind::durable => StatsEvent::DurableErrors,
        }
    }
}
