use crate::domain::entities::{ChannelStats, EnqueueOutcome, Log};
use std::sync::Arc;

/// Hook consulted by a log channel before each log is delivered.
pub trait ChannelDelegate: Send + Sync {
    fn should_filter(&self, log: &Log) -> bool;
}

pub trait LogChannel: Send + Sync {
    fn add_delegate(&self, delegate: Arc<dyn ChannelDelegate>);
    fn enqueue(&self, log: Log) -> EnqueueOutcome;
    fn delivered(&self) -> Vec<Log>;
    fn stats(&self) -> ChannelStats;
}
