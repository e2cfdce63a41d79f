use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::utils::{set_global_log_level, LogLevel};

/// What a [`SerialWriter`](crate::serial::SerialWriter) does when output overflows its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncationPolicy {
    /// Send what fits and say nothing.
    #[default]
    Silent,
    /// Send what fits, then return `SerialError::Truncated`.
    Report,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
    pub truncation: TruncationPolicy,
    /// Global log level. `SerialWriter` does not touch it; call
    /// [`apply_log_level`](Self::apply_log_level) (or `commands::load_config`) to use it.
    pub log_level: LogLevel,
}

impl WriterConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn apply_log_level(&self) {
        set_global_log_level(self.log_level);
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_silent_truncation() {
        let config = WriterConfig::default();
        assert_eq!(config.truncation, TruncationPolicy::Silent);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = WriterConfig::from_json_str(r#"{"truncation": "report"}"#).unwrap();
        assert_eq!(config.truncation, TruncationPolicy::Report);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = WriterConfig::from_json_str(r#"{"buffer": 1024}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn apply_log_level_sets_global_level() {
        let config = WriterConfig::from_json_str(r#"{"log_level": "warn"}"#).unwrap();
        config.apply_log_level();
        assert_eq!(crate::utils::log::global_log_level(), LogLevel::Warn);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = WriterConfig::load("/nonexistent/serial-utils.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
