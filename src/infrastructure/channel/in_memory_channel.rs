use crate::domain::{
    entities::{ChannelStats, EnqueueOutcome, Log},
    repositories::{ChannelDelegate, LogChannel},
};
use std::sync::{Arc, Mutex, RwLock};

/// Log channel that keeps delivered logs in memory.
pub struct InMemoryLogChannel {
    delegates: RwLock<Vec<Arc<dyn ChannelDelegate>>>,
    delivered: Mutex<Vec<Log>>,
    stats: Mutex<ChannelStats>,
}

impl InMemoryLogChannel {
    pub fn new() -> Self {
        Self {
            delegates: RwLock::new(Vec::new()),
            delivered: Mutex::new(Vec::new()),
            stats: Mutex::new(ChannelStats::default()),
        }
    }

    #[cfg(test)]
    pub fn delegate_count(&self) -> usize {
        self.delegates.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn is_filtered(&self, log: &Log) -> bool {
        let delegates = self.delegates.read().unwrap_or_else(|e| e.into_inner());
        delegates.iter().any(|delegate| delegate.should_filter(log))
    }
}

impl Default for InMemoryLogChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl LogChannel for InMemoryLogChannel {
    fn add_delegate(&self, delegate: Arc<dyn ChannelDelegate>) {
        self.delegates
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(delegate);
    }

    fn enqueue(&self, log: Log) -> EnqueueOutcome {
        let outcome = if self.is_filtered(&log) {
            tracing::debug!("Filtered {} log '{}'", log.kind, log.name);
            EnqueueOutcome::Filtered
        } else {
            tracing::debug!("Delivered {} log '{}'", log.kind, log.name);
            self.delivered
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(log);
            EnqueueOutcome::Delivered
        };

        let mut stats = self.stats.lock().unwrap_or_else(|e| e.into_inner());
        if outcome.is_filtered() {
            stats.filtered += 1;
        } else {
            stats.delivered += 1;
        }

        outcome
    }

    fn delivered(&self) -> Vec<Log> {
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn stats(&self) -> ChannelStats {
        *self.stats.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LogKind;

    struct DropNamed(&'static str);

    impl ChannelDelegate for DropNamed {
        fn should_filter(&self, log: &Log) -> bool {
            log.name == self.0
        }
    }

    #[test]
    fn test_delivers_without_delegates() {
        let channel = InMemoryLogChannel::new();
        assert_eq!(channel.enqueue(Log::event("a")), EnqueueOutcome::Delivered);
        assert_eq!(channel.delivered().len(), 1);
        assert_eq!(
            channel.stats(),
            ChannelStats {
                delivered: 1,
                filtered: 0
            }
        );
    }

    #[test]
    fn test_any_delegate_can_filter() {
        let channel = InMemoryLogChannel::new();
        channel.add_delegate(Arc::new(DropNamed("secret")));
        channel.add_delegate(Arc::new(DropNamed("noise")));

        assert!(channel.enqueue(Log::event("secret")).is_filtered());
        assert!(channel.enqueue(Log::new(LogKind::Page, "noise")).is_filtered());
        assert!(!channel.enqueue(Log::event("checkout")).is_filtered());

        let delivered = channel.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].name, "checkout");
        assert_eq!(channel.stats().filtered, 2);
    }
}
