//! Declarative logger and sink configuration

use super::severity::Severity;
use crate::core::{LoggerError, Result, DEFAULT_FLUSH_INTERVAL, DEFAULT_PATTERN};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Directory file sinks are rooted at when a spec does not name one
pub const DEFAULT_LOG_DIRECTORY: &str = "/var/log/bidrouter/";

/// Per-file capacity in megabytes (1 GiB)
pub const DEFAULT_LOG_FILE_MAX_SIZE_MB: u64 = 1024;

/// Rotated files retained per file sink
pub const DEFAULT_LOG_FILE_MAX_COUNT: u32 = 3;

/// Kind of output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Console,
    File,
    /// Accepted but inert
    Dlt,
    /// Accepted but inert
    Syslog,
}

/// Configuration of one sink of a logger
///
/// # Example
///
/// ```
/// use logger_facade::{Severity, SinkKind, SinkSpec};
///
/// let spec = SinkSpec::file()
///     .with_level(Severity::Warning)
///     .with_directory("/tmp/x")
///     .with_max_size_mb(2)
///     .with_max_count(5);
/// assert_eq!(spec.kind, SinkKind::File);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkSpec {
    #[serde(alias = "type")]
    pub kind: SinkKind,
    pub log_level: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_directory: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_max_size_mb: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_max_count: Option<u32>,
}

impl SinkSpec {
    pub fn new(kind: SinkKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn console() -> Self {
        Self::new(SinkKind::Console)
    }

    pub fn file() -> Self {
        Self::new(SinkKind::File)
    }

    pub fn dlt() -> Self {
        Self::new(SinkKind::Dlt)
    }

    pub fn syslog() -> Self {
        Self::new(SinkKind::Syslog)
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_level(mut self, level: Severity) -> Self {
        self.log_level = level;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_size_mb(mut self, size_mb: u64) -> Self {
        self.log_file_max_size_mb = Some(size_mb);
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_count(mut self, count: u32) -> Self {
        self.log_file_max_count = Some(count);
        self
    }
}

/// Configuration of one named logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSpec {
    pub name: String,
    #[serde(default)]
    pub log_level: Severity,
    #[serde(default)]
    pub sinks: Vec<SinkSpec>,
}

impl LoggerSpec {
    pub fn new(name: impl Into<String>, log_level: Severity) -> Self {
        Self {
            name: name.into(),
            log_level,
            sinks: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_sink(mut self, sink: SinkSpec) -> Self {
        self.sinks.push(sink);
        self
    }

    /// The configuration behind the single-name registration shortcut:
    /// Info threshold, a console sink and a file sink, both at Info.
    ///
    /// The file sink leaves directory, size and count unset so the log
    /// system's defaults apply.
    pub fn canonical(name: impl Into<String>) -> Self {
        Self::new(name, Severity::Info)
            .with_sink(SinkSpec::console().with_level(Severity::Info))
            .with_sink(SinkSpec::file().with_level(Severity::Info))
    }

    /// Parse a spec from JSON
    ///
    /// # Example
    ///
    /// ```
    /// use logger_facade::{LoggerSpec, Severity, SinkKind};
    ///
    /// let spec = LoggerSpec::from_json(r#"{
    ///     "name": "svc",
    ///     "log_level": "info",
    ///     "sinks": [{"kind": "console"}, {"kind": "file", "log_file_max_count": 5}]
    /// }"#).unwrap();
    /// assert_eq!(spec.log_level, Severity::Info);
    /// assert_eq!(spec.sinks[1].kind, SinkKind::File);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: LoggerSpec = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LoggerError::config("LoggerSpec", "logger name must not be empty"));
        }
        Ok(())
    }
}

/// Settings shared by every logger of a log system.
///
/// Fixed at system creation; the first initialization wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSystemConfig {
    /// Rendering pattern applied to every registered logger
    pub pattern: String,
    /// Interval of the background flush, in seconds; 0 disables it
    pub flush_interval_secs: u64,
    /// Records at or above this severity are flushed immediately
    pub flush_on: Severity,
    pub default_log_directory: PathBuf,
    pub default_max_file_size_mb: u64,
    pub default_max_file_count: u32,
    /// Color the `%^..%$` range on the console
    pub use_colors: bool,
}

impl Default for LogSystemConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            flush_interval_secs: DEFAULT_FLUSH_INTERVAL.as_secs(),
            flush_on: Severity::Error,
            default_log_directory: PathBuf::from(DEFAULT_LOG_DIRECTORY),
            default_max_file_size_mb: DEFAULT_LOG_FILE_MAX_SIZE_MB,
            default_max_file_count: DEFAULT_LOG_FILE_MAX_COUNT,
            use_colors: true,
        }
    }
}

impl LogSystemConfig {
    pub fn flush_interval(&self) -> Duration {
        Duration::from_secs(self.flush_interval_secs)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_spec_defaults() {
        let spec = SinkSpec::default();
        assert_eq!(spec.kind, SinkKind::Console);
        assert_eq!(spec.log_level, Severity::Trace);
        assert!(spec.log_directory.is_none());
        assert!(spec.log_file_max_size_mb.is_none());
        assert!(spec.log_file_max_count.is_none());
    }

    #[test]
    fn test_canonical_spec() {
        let spec = LoggerSpec::canonical("svc");

        assert_eq!(spec.name, "svc");
        assert_eq!(spec.log_level, Severity::Info);
        assert_eq!(spec.sinks.len(), 2);
        assert_eq!(spec.sinks[0], SinkSpec::console().with_level(Severity::Info));
        assert_eq!(spec.sinks[1], SinkSpec::file().with_level(Severity::Info));
    }

    #[test]
    fn test_logger_spec_from_json() {
        let spec = LoggerSpec::from_json(
            r#"{
                "name": "n",
                "log_level": "warning",
                "sinks": [
                    {"type": "file", "log_directory": "/tmp/x", "log_file_max_size_mb": 2, "log_file_max_count": 5},
                    {"kind": "syslog"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(spec.log_level, Severity::Warning);
        assert_eq!(
            spec.sinks[0],
            SinkSpec::file()
                .with_directory("/tmp/x")
                .with_max_size_mb(2)
                .with_max_count(5)
        );
        assert_eq!(spec.sinks[1].kind, SinkKind::Syslog);
    }

    #[test]
    fn test_logger_spec_rejects_empty_name() {
        let err = LoggerSpec::from_json(r#"{"name": ""}"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerSpec::from_json(r#"{"log_level": "info"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_system_config_defaults_and_partial_json() {
        let config = LogSystemConfig::default();
        assert_eq!(config.pattern, DEFAULT_PATTERN);
        assert_eq!(config.flush_interval(), Duration::from_secs(10));
        assert_eq!(config.default_max_file_size_mb, 1024);
        assert_eq!(config.default_max_file_count, 3);
        assert_eq!(config.flush_on, Severity::Error);

        let config = LogSystemConfig::from_json(r#"{"flush_interval_secs": 2, "flush_on": "warning", "use_colors": false}"#).unwrap();
        assert_eq!(config.flush_interval(), Duration::from_secs(2));
        assert!(!config.use_colors);
        assert_eq!(config.flush_on, Severity::Warning);
        assert_eq!(config.default_log_directory, PathBuf::from(DEFAULT_LOG_DIRECTORY));
    }
}
