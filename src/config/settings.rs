use std::time::Duration;

use clap::ValueEnum;
use serde::Deserialize;

use crate::helpers::duration::DurationFormat;
use crate::utils::constants::DEFAULT_HOST;

/// ================================
/// Client settings
/// ================================
///
/// Callers that keep client options in their own config files (JSON, YAML,
/// TOML) can deserialize this struct directly; every field is optional:
///
/// ```
/// let settings: sethealth::ClientSettings =
///     serde_json::from_str(r#"{"base_url":"http://127.0.0.1:8080"}"#).unwrap();
/// assert_eq!(settings.base_url, "http://127.0.0.1:8080");
/// assert_eq!(settings.timeout(), None);
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub expires_in_format: DurationFormat,
    /// whole-request timeout; none keeps the transport default
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            expires_in_format: DurationFormat::default(),
            timeout_ms: None,
        }
    }
}

impl ClientSettings {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_expires_in_format(mut self, format: DurationFormat) -> Self {
        self.expires_in_format = format;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

fn default_base_url() -> String {
    DEFAULT_HOST.to_string()
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // EnvFilter directive, e.g. "info" or "warn,sethealth=debug"
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_host() {
        let settings = ClientSettings::default();
        assert_eq!(settings.base_url, "https://api.set.health");
        assert_eq!(settings.expires_in_format, DurationFormat::Seconds);
        assert_eq!(settings.timeout(), None);
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let settings: ClientSettings =
            serde_json::from_str(r#"{"expires_in_format":"nanoseconds","timeout_ms":2500}"#).unwrap();
        assert_eq!(settings.base_url, DEFAULT_HOST);
        assert_eq!(settings.expires_in_format, DurationFormat::Nanoseconds);
        assert_eq!(settings.timeout(), Some(Duration::from_millis(2500)));
    }

    #[test]
    fn builder_overrides() {
        let settings = ClientSettings::default()
            .with_base_url("http://127.0.0.1:8080")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(settings.base_url, "http://127.0.0.1:8080");
        assert_eq!(settings.timeout_ms, Some(3000));
    }
}
