use crate::application::{UseCaseContainer, dto::FilterStatusDto};
use crate::domain::entities::{EnqueueOutcome, Log};
use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Host-side binding for the event filter toggle.
///
/// Receives its use cases at construction; it never reaches for shared state.
pub struct EventFilterController {
    use_cases: Arc<UseCaseContainer>,
    enable_on_start: bool,
    loaded: AtomicBool,
}

impl EventFilterController {
    pub fn new(use_cases: Arc<UseCaseContainer>, enable_on_start: bool) -> Self {
        Self {
            use_cases,
            enable_on_start,
            loaded: AtomicBool::new(false),
        }
    }

    /// Starts the filter service and returns the state the toggle should show.
    ///
    /// May be called again after a failed start; `enable_on_start` is applied
    /// after the first start that succeeds.
    pub async fn load(&self) -> Result<bool> {
        self.use_cases.start_event_filter.execute().await?;

        if !self.loaded.swap(true, Ordering::SeqCst) && self.enable_on_start {
            self.use_cases.set_event_filter_enabled.execute(true).await;
        }

        Ok(self.is_enabled().await)
    }

    pub async fn set_enabled(&self, enabled: bool) {
        self.use_cases.set_event_filter_enabled.execute(enabled).await
    }

    pub async fn toggle(&self) -> bool {
        let enabled = !self.is_enabled().await;
        self.set_enabled(enabled).await;
        enabled
    }

    pub async fn is_enabled(&self) -> bool {
        self.use_cases.get_event_filter_enabled.execute().await
    }

    pub async fn status(&self) -> FilterStatusDto {
        let state = self.use_cases.get_event_filter_state.execute().await;
        FilterStatusDto::new(state, self.use_cases.get_channel_stats.execute())
    }

    pub fn track(&self, log: Log) -> Result<EnqueueOutcome> {
        self.use_cases.track_log.execute(log)
    }

    pub fn delivered(&self) -> Vec<Log> {
        self.use_cases.get_delivered_logs.execute()
    }
}
