use crate::domain::entities::Log;

pub struct LogValidator;

impl LogValidator {
    pub fn validate_name(name: &str) -> bool {
        !name.is_empty()
            && name.len() <= 256
            && name
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ' '))
    }

    pub fn validate_property_key(key: &str) -> bool {
        !key.is_empty() && key.len() <= 125 && !key.chars().any(char::is_whitespace)
    }

    pub fn validate_log(log: &Log) -> Result<(), String> {
        if !Self::validate_name(&log.name) {
            return Err(format!("Invalid log name: {}", log.name));
        }
        if let Some(key) = log.properties.keys().find(|k| !Self::validate_property_key(k)) {
            return Err(format!("Invalid property key: {}", key));
        }
        Ok(())
    }
}
