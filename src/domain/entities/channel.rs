use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueOutcome {
    Delivered,
    Filtered,
}

impl EnqueueOutcome {
    pub fn is_filtered(&self) -> bool {
        matches!(self, EnqueueOutcome::Filtered)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStats {
    pub delivered: usize,
    pub filtered: usize,
}
