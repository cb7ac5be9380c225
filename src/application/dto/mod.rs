use crate::domain::entities::{ChannelStats, FilterState};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterStatusDto {
    pub started: bool,
    pub enabled: bool,
    pub filtering: bool,
    pub delivered: usize,
    pub filtered: usize,
}

impl FilterStatusDto {
    pub fn new(state: FilterState, stats: ChannelStats) -> Self {
        Self {
            started: state.is_started(),
            enabled: state.is_enabled(),
            filtering: state.is_filtering(),
            delivered: stats.delivered,
            filtered: stats.filtered,
        }
    }
}

impl fmt::Display for FilterStatusDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "event filter {} ({}), delivered: {}, filtered: {}",
            if self.enabled { "enabled" } else { "disabled" },
            if self.started { "started" } else { "not started" },
            self.delivered,
            self.filtered
        )
    }
}
