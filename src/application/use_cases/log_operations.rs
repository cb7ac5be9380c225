use crate::domain::{
    entities::{ChannelStats, EnqueueOutcome, Log},
    repositories::LogChannel,
    services::LogValidator,
};
use anyhow::{Result, anyhow};
use std::sync::Arc;

pub struct TrackLog {
    channel: Arc<dyn LogChannel>,
}

impl TrackLog {
    pub fn new(channel: Arc<dyn LogChannel>) -> Self {
        Self { channel }
    }

    pub fn execute(&self, log: Log) -> Result<EnqueueOutcome> {
        LogValidator::validate_log(&log).map_err(|e| anyhow!(e))?;
        Ok(self.channel.enqueue(log))
    }
}

pub struct GetChannelStats {
    channel: Arc<dyn LogChannel>,
}

impl GetChannelStats {
    pub fn new(channel: Arc<dyn LogChannel>) -> Self {
        Self { channel }
    }

    pub fn execute(&self) -> ChannelStats {
        self.channel.stats()
    }
}

pub struct GetDeliveredLogs {
    channel: Arc<dyn LogChannel>,
}

impl GetDeliveredLogs {
    pub fn new(channel: Arc<dyn LogChannel>) -> Self {
        Self { channel }
    }

    pub fn execute(&self) -> Vec<Log> {
        self.channel.delivered()
    }
}
