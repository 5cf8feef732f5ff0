//! Translation between facade severities and backend levels

use super::severity::Severity;
use crate::core::LogLevel;

/// Map a facade severity to the backend's native level.
///
/// Total and order preserving. There is deliberately no catch-all arm:
/// adding a severity without a mapping fails to compile.
#[inline]
pub fn to_backend(severity: Severity) -> LogLevel {
    match severity {
        Severity::Trace => LogLevel::Trace,
        Severity::Debug => LogLevel::Debug,
        Severity::Info => LogLevel::Info,
        Severity::Warning => LogLevel::Warn,
        Severity::Error => LogLevel::Error,
        Severity::Critical => LogLevel::Critical,
        Severity::Off => LogLevel::Off,
    }
}

/// Inverse of [`to_backend`]
#[inline]
pub fn from_backend(level: LogLevel) -> Severity {
    match level {
        LogLevel::Trace => Severity::Trace,
        LogLevel::Debug => Severity::Debug,
        LogLevel::Info => Severity::Info,
        LogLevel::Warn => Severity::Warning,
        LogLevel::Error => Severity::Error,
        LogLevel::Critical => Severity::Critical,
        LogLevel::Off => Severity::Off,
    }
}

impl From<Severity> for LogLevel {
    fn from(severity: Severity) -> Self {
        to_backend(severity)
    }
}

impl From<LogLevel> for Severity {
    fn from(level: LogLevel) -> Self {
        from_backend(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_severity_maps() {
        assert_eq!(to_backend(Severity::Trace), LogLevel::Trace);
        assert_eq!(to_backend(Severity::Debug), LogLevel::Debug);
        assert_eq!(to_backend(Severity::Info), LogLevel::Info);
        assert_eq!(to_backend(Severity::Warning), LogLevel::Warn);
        assert_eq!(to_backend(Severity::Error), LogLevel::Error);
        assert_eq!(to_backend(Severity::Critical), LogLevel::Critical);
        assert_eq!(to_backend(Severity::Off), LogLevel::Off);
    }

    #[test]
    fn test_mapping_is_strictly_order_preserving() {
        for pair in Severity::ALL.windows(2) {
            assert!(to_backend(pair[0]) < to_backend(pair[1]));
        }
    }

    #[test]
    fn test_roundtrip_both_ways() {
        for severity in Severity::ALL {
            assert_eq!(from_backend(to_backend(severity)), severity);
        }
        for level in LogLevel::ALL {
            assert_eq!(to_backend(from_backend(level)), level);
        }
    }
}
