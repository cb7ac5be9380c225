use crate::application::EventFilterService;
use crate::application::use_cases::*;
use crate::domain::repositories::{FilterMechanism, LogChannel};
use std::sync::Arc;

pub struct UseCaseContainer {
    pub start_event_filter: Arc<StartEventFilter>,
    pub set_event_filter_enabled: Arc<SetEventFilterEnabled>,
    pub get_event_filter_state: Arc<GetEventFilterState>,
    pub get_event_filter_enabled: Arc<GetEventFilterEnabled>,
    pub track_log: Arc<TrackLog>,
    pub get_channel_stats: Arc<GetChannelStats>,
    pub get_delivered_logs: Arc<GetDeliveredLogs>,
}

impl UseCaseContainer {
    pub fn new(mechanism: Arc<dyn FilterMechanism>, channel: Arc<dyn LogChannel>) -> Self {
        let service = Arc::new(EventFilterService::new(mechanism));

        Self {
            start_event_filter: Arc::new(StartEventFilter::new(Arc::clone(&service))),
            set_event_filter_enabled: Arc::new(SetEventFilterEnabled::new(Arc::clone(&service))),
            get_event_filter_state: Arc::new(GetEventFilterState::new(Arc::clone(&service))),
            get_event_filter_enabled: Arc::new(GetEventFilterEnabled::new(Arc::clone(&service))),
            track_log: Arc::new(TrackLog::new(Arc::clone(&channel))),
            get_channel_stats: Arc::new(GetChannelStats::new(Arc::clone(&channel))),
            get_delivered_logs: Arc::new(GetDeliveredLogs::new(Arc::clone(&channel))),
        }
    }
}
