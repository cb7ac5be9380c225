use crate::application::EventFilterService;
use crate::domain::{FilterError, entities::FilterState};
use std::sync::Arc;

pub struct StartEventFilter {
    service: Arc<EventFilterService>,
}

impl StartEventFilter {
    pub fn new(service: Arc<EventFilterService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self) -> Result<(), FilterError> {
        self.service.start().await
    }
}

pub struct SetEventFilterEnabled {
    service: Arc<EventFilterService>,
}

impl SetEventFilterEnabled {
    pub fn new(service: Arc<EventFilterService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, enabled: bool) {
        self.service.set_enabled(enabled).await
    }
}

pub struct GetEventFilterState {
    service: Arc<EventFilterService>,
}

impl GetEventFilterState {
    pub fn new(service: Arc<EventFilterService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self) -> FilterState {
        self.service.state().await
    }
}

pub struct GetEventFilterEnabled {
    service: Arc<EventFilterService>,
}

impl GetEventFilterEnabled {
    pub fn new(service: Arc<EventFilterService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self) -> bool {
        self.service.is_enabled().await
    }
}
