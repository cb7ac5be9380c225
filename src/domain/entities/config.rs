use crate::domain::entities::LogKind;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub event_filter: EventFilterConfig,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            event_filter: EventFilterConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EventFilterConfig {
    /// Log kinds dropped while the filter is enabled.
    pub filtered_kinds: Vec<LogKind>,
    pub enable_on_start: bool,
}

impl Default for EventFilterConfig {
    fn default() -> Self {
        Self {
            filtered_kinds: vec![LogKind::Event],
            enable_on_start: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.event_filter, EventFilterConfig::default());
    }

    #[test]
    fn test_filtered_kinds_deserialize_from_names() {
        let config: AppConfig = serde_json::from_str(
            r#"{"event_filter": {"filtered_kinds": ["event", "page"], "enable_on_start": true}}"#,
        )
        .unwrap();
        assert_eq!(
            config.event_filter.filtered_kinds,
            vec![LogKind::Event, LogKind::Page]
        );
        assert!(config.event_filter.enable_on_start);
        assert_eq!(config.log_level, "info");
    }
}
