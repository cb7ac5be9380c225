use crate::domain::entities::AppConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigRepository {
    config_path: PathBuf,
}

impl ConfigRepository {
    pub fn new() -> Self {
        let config_dir = if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home).join(".config").join("eventfilter")
        } else {
            PathBuf::from(".")
        };

        Self::with_path(config_dir.join("config.json"))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Cannot read event filter config {}", self.config_path.display())
        })?;

        let config: AppConfig = serde_json::from_str(&content).with_context(|| {
            format!(
                "Event filter config {} is not valid JSON for this version",
                self.config_path.display()
            )
        })?;

        Ok(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Cannot create event filter config directory {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(config).context("Cannot encode event filter config")?;

        fs::write(&self.config_path, content).with_context(|| {
            format!("Cannot write event filter config {}", self.config_path.display())
        })?;

        Ok(())
    }
}

impl Default for ConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LogKind;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ConfigRepository::with_path(dir.path().join("absent.json"));
        assert_eq!(repo.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_then_load_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ConfigRepository::with_path(dir.path().join("nested").join("config.json"));

        let mut config = AppConfig::default();
        config.event_filter.enable_on_start = true;
        config.event_filter.filtered_kinds = vec![LogKind::Event, LogKind::Custom];
        repo.save(&config).unwrap();

        assert!(repo.path().exists());
        assert_eq!(repo.load().unwrap(), config);
    }

    #[test]
    fn test_save_into_file_path_reports_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let repo = ConfigRepository::with_path(blocker.join("config.json"));
        let err = repo.save(&AppConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("Cannot create event filter config directory"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ConfigRepository::with_path(&path).load().unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
        assert!(err.to_string().contains("config.json"));
    }
}
