use crate::domain::{
    entities::{Log, LogKind},
    repositories::{ChannelDelegate, FilterMechanism, LogChannel},
};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Channel delegate that drops logs of the configured kinds while active.
pub struct EventFilterDelegate {
    filtered_kinds: HashSet<LogKind>,
    active: AtomicBool,
}

impl EventFilterDelegate {
    pub fn new(filtered_kinds: impl IntoIterator<Item = LogKind>) -> Self {
        Self {
            filtered_kinds: filtered_kinds.into_iter().collect(),
            active: AtomicBool::new(false),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::SeqCst);
    }
}

impl ChannelDelegate for EventFilterDelegate {
    fn should_filter(&self, log: &Log) -> bool {
        self.is_active() && self.filtered_kinds.contains(&log.kind)
    }
}

/// Filtering mechanism that hooks an [`EventFilterDelegate`] into a log channel.
pub struct ChannelFilterMechanism {
    channel: Arc<dyn LogChannel>,
    delegate: Arc<EventFilterDelegate>,
    registered: AtomicBool,
}

impl ChannelFilterMechanism {
    pub fn new(channel: Arc<dyn LogChannel>, filtered_kinds: Vec<LogKind>) -> Self {
        Self {
            channel,
            delegate: Arc::new(EventFilterDelegate::new(filtered_kinds)),
            registered: AtomicBool::new(false),
        }
    }

    #[cfg(test)]
    pub fn delegate(&self) -> Arc<EventFilterDelegate> {
        Arc::clone(&self.delegate)
    }
}

#[async_trait]
impl FilterMechanism for ChannelFilterMechanism {
    async fn initialize_filtering(&self) -> Result<()> {
        if self.registered.swap(true, Ordering::SeqCst) {
            tracing::debug!("Event filter delegate already registered");
            return Ok(());
        }

        self.channel
            .add_delegate(Arc::clone(&self.delegate) as Arc<dyn ChannelDelegate>);
        tracing::info!(
            "Registered event filter delegate for {} log kind(s)",
            self.delegate.filtered_kinds.len()
        );
        Ok(())
    }

    async fn apply_filter_flag(&self, enabled: bool) {
        self.delegate.set_active(enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::EventFilterService;
    use crate::domain::entities::EnqueueOutcome;
    use crate::infrastructure::channel::InMemoryLogChannel;

    fn setup() -> (Arc<InMemoryLogChannel>, Arc<ChannelFilterMechanism>) {
        let channel = Arc::new(InMemoryLogChannel::new());
        let mechanism = Arc::new(ChannelFilterMechanism::new(
            Arc::clone(&channel) as Arc<dyn LogChannel>,
            vec![LogKind::Event],
        ));
        (channel, mechanism)
    }

    #[test]
    fn test_delegate_only_filters_configured_kinds_when_active() {
        let delegate = EventFilterDelegate::new([LogKind::Event]);
        let event = Log::event("click");
        let page = Log::new(LogKind::Page, "home");

        assert!(!delegate.should_filter(&event));

        delegate.set_active(true);
        assert!(delegate.should_filter(&event));
        assert!(!delegate.should_filter(&page));
    }

    #[tokio::test]
    async fn test_initialize_registers_delegate_once() {
        let (channel, mechanism) = setup();
        mechanism.initialize_filtering().await.unwrap();
        mechanism.initialize_filtering().await.unwrap();
        assert_eq!(channel.delegate_count(), 1);

        mechanism.apply_filter_flag(true).await;
        assert!(channel.enqueue(Log::event("click")).is_filtered());
    }

    #[tokio::test]
    async fn test_service_drives_channel_filtering() {
        let (channel, mechanism) = setup();
        let service = EventFilterService::new(Arc::clone(&mechanism) as Arc<dyn FilterMechanism>);

        service.set_enabled(true).await;
        assert_eq!(channel.enqueue(Log::event("before start")), EnqueueOutcome::Delivered);

        service.start().await.unwrap();
        assert!(mechanism.delegate().is_active());
        assert_eq!(channel.enqueue(Log::event("filtered")), EnqueueOutcome::Filtered);
        assert_eq!(
            channel.enqueue(Log::new(LogKind::Page, "home")),
            EnqueueOutcome::Delivered
        );

        service.set_enabled(false).await;
        assert_eq!(channel.enqueue(Log::event("after")), EnqueueOutcome::Delivered);

        let names: Vec<String> = channel.delivered().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["before start", "home", "after"]);
    }
}
