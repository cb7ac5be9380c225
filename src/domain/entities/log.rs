use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogKind {
    Event,
    Page,
    StartSession,
    StartService,
    Custom,
}

impl LogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Event => "event",
            LogKind::Page => "page",
            LogKind::StartSession => "startSession",
            LogKind::StartService => "startService",
            LogKind::Custom => "custom",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "event" => Ok(LogKind::Event),
            "page" => Ok(LogKind::Page),
            "startsession" => Ok(LogKind::StartSession),
            "startservice" => Ok(LogKind::StartService),
            "custom" => Ok(LogKind::Custom),
            _ => Err(format!("Unknown log kind: {}", s)),
        }
    }
}

/// A telemetry log travelling through the log channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub kind: LogKind,
    pub name: String,
    pub properties: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
}

impl Log {
    pub fn new(kind: LogKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            properties: BTreeMap::new(),
            timestamp: Utc::now(),
        }
    }

    #[cfg(test)]
    pub fn event(name: impl Into<String>) -> Self {
        Self::new(LogKind::Event, name)
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}
