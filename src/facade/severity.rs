//! Facade severity levels

use crate::core::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a message, also used as a threshold.
///
/// Ordered `Trace < Debug < Info < Warning < Error < Critical < Off`; a
/// threshold of `Off` suppresses all output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Trace = 0,
    Debug = 1,
    Info = 2,
    #[serde(alias = "warn")]
    Warning = 3,
    Error = 4,
    #[serde(alias = "fatal")]
    Critical = 5,
    Off = 6,
}

impl Severity {
    pub const ALL: [Severity; 7] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Off,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Off => "OFF",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" | "FATAL" => Ok(Severity::Critical),
            "OFF" => Ok(Severity::Off),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

/// Raw discriminants outside `0..=6` are a configuration defect
impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        Severity::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(LoggerError::InvalidSeverity(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_roundtrip() {
        for severity in Severity::ALL {
            assert_eq!(Severity::try_from(severity as u8).unwrap(), severity);
        }
    }

    #[test]
    fn test_count_sentinel_rejected() {
        assert!(matches!(
            Severity::try_from(7),
            Err(LoggerError::InvalidSeverity(7))
        ));
        assert!(Severity::try_from(u8::MAX).is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
        let parsed: Severity = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(parsed, Severity::Warning);
        assert!(serde_json::from_str::<Severity>("\"loud\"").is_err());
    }

    #[test]
    fn test_default_is_trace() {
        assert_eq!(Severity::default(), Severity::Trace);
    }
}
