use crate::domain::{FilterError, entities::FilterState, repositories::FilterMechanism};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Owns the on/off state of event filtering and the one-time startup of the
/// filtering mechanism.
///
/// The state lives behind a single async mutex. `start` keeps it locked while
/// the mechanism initializes, so a concurrent `set_enabled` waits for the
/// outcome instead of racing it.
pub struct EventFilterService {
    mechanism: Arc<dyn FilterMechanism>,
    state: Mutex<FilterState>,
}

impl EventFilterService {
    pub fn new(mechanism: Arc<dyn FilterMechanism>) -> Self {
        Self {
            mechanism,
            state: Mutex::new(FilterState::new()),
        }
    }

    /// Initializes the filtering mechanism on the first successful call.
    ///
    /// Later calls are no-ops. A failed initialization leaves the service
    /// unstarted so the caller may try again.
    pub async fn start(&self) -> Result<(), FilterError> {
        let mut state = self.state.lock().await;
        if state.is_started() {
            tracing::debug!("Event filter service already started");
            return Ok(());
        }

        tracing::info!("Starting event filter service");
        if let Err(e) = self.mechanism.initialize_filtering().await {
            tracing::error!("Event filter initialization failed: {:#}", e);
            return Err(FilterError::InitializationFailure(e));
        }

        state.mark_started();
        let enabled = state.is_enabled();
        self.mechanism.apply_filter_flag(enabled).await;
        tracing::info!("Event filter service started (enabled: {})", enabled);

        Ok(())
    }

    pub async fn set_enabled(&self, enabled: bool) {
        let mut state = self.state.lock().await;
        if !state.set_enabled(enabled) {
            return;
        }

        if state.is_started() {
            tracing::info!("Event filter {}", if enabled { "enabled" } else { "disabled" });
            self.mechanism.apply_filter_flag(enabled).await;
        } else {
            tracing::debug!(
                "Event filter flag set to {} before start; deferred until start",
                enabled
            );
        }
    }

    pub async fn is_enabled(&self) -> bool {
        self.state.lock().await.is_enabled()
    }

    pub async fn state(&self) -> FilterState {
        *self.state.lock().await
    }
}
