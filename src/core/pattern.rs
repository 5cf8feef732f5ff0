//! Rendering pattern for log records
//!
//! A pattern is parsed once into a token list and then applied to every
//! record of a logger. Supported flags:
//!
//! | flag | output |
//! |------|--------|
//! | `%Y` `%m` `%d` | year, month, day |
//! | `%H` `%M` `%S` | hour, minute, second |
//! | `%e` | milliseconds |
//! | `%z` | UTC offset, `+hh:mm` |
//! | `%n` | logger name |
//! | `%t` | thread id |
//! | `%l` `%L` | level name, one-letter level |
//! | `%^` `%$` | start and end of the colored range |
//! | `%v` | message |
//! | `%%` | a literal `%` |
//!
//! Unknown flags are copied verbatim.

use super::log_level::LogLevel;
use super::log_record::LogRecord;
use chrono::{Datelike, Timelike};
use std::fmt::Write;
use std::ops::Range;

/// Pattern applied to every logger registered through a log system
pub const DEFAULT_PATTERN: &str = "[%Y-%m-%d %H:%M:%S.%e %z] [%n] [tid %t] [%^%l%$] %v";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millis,
    UtcOffset,
    LoggerName,
    ThreadId,
    Level,
    ShortLevel,
    ColorStart,
    ColorEnd,
    Message,
}

/// A record rendered to a single line, ready for any sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRecord {
    pub level: LogLevel,
    /// Rendered line, without a trailing newline
    pub line: String,
    /// Byte range of `line` enclosed by `%^ ... %$`
    pub color_range: Option<Range<usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn new(pattern: &str) -> Self {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            let token = match chars.next() {
                Some('Y') => Token::Year,
                Some('m') => Token::Month,
                Some('d') => Token::Day,
                Some('H') => Token::Hour,
                Some('M') => Token::Minute,
                Some('S') => Token::Second,
                Some('e') => Token::Millis,
                Some('z') => Token::UtcOffset,
                Some('n') => Token::LoggerName,
                Some('t') => Token::ThreadId,
                Some('l') => Token::Level,
                Some('L') => Token::ShortLevel,
                Some('^') => Token::ColorStart,
                Some('$') => Token::ColorEnd,
                Some('v') => Token::Message,
                Some('%') => {
                    literal.push('%');
                    continue;
                }
                Some(other) => {
                    literal.push('%');
                    literal.push(other);
                    continue;
                }
                None => {
                    literal.push('%');
                    break;
                }
            };

            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(token);
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Self {
            source: pattern.to_string(),
            tokens,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Render a record according to this pattern
    pub fn format(&self, record: &LogRecord) -> FormattedRecord {
        let ts = &record.timestamp;
        let mut line = String::with_capacity(64 + record.message.len());
        let mut color_start = None;
        let mut color_end = None;

        // Writing into a String cannot fail
        for token in &self.tokens {
            let _ = match token {
                Token::Literal(text) => {
                    line.push_str(text);
                    Ok(())
                }
                Token::Year => write!(line, "{:04}", ts.year()),
                Token::Month => write!(line, "{:02}", ts.month()),
                Token::Day => write!(line, "{:02}", ts.day()),
                Token::Hour => write!(line, "{:02}", ts.hour()),
                Token::Minute => write!(line, "{:02}", ts.minute()),
                Token::Second => write!(line, "{:02}", ts.second()),
                Token::Millis => write!(line, "{:03}", ts.timestamp_subsec_millis() % 1000),
                Token::UtcOffset => write!(line, "{}", ts.format("%:z")),
                Token::LoggerName => {
                    line.push_str(&record.logger_name);
                    Ok(())
                }
                Token::ThreadId => {
                    line.push_str(&record.thread_id);
                    Ok(())
                }
                Token::Level => {
                    line.push_str(record.level.to_str());
                    Ok(())
                }
                Token::ShortLevel => {
                    line.push_str(record.level.short_str());
                    Ok(())
                }
                Token::ColorStart => {
                    color_start = Some(line.len());
                    Ok(())
                }
                Token::ColorEnd => {
                    color_end = Some(line.len());
                    Ok(())
                }
                Token::Message => {
                    line.push_str(&record.message);
                    Ok(())
                }
            };
        }

        let color_range = color_start.map(|start| start..color_end.unwrap_or(line.len()).max(start));

        FormattedRecord {
            level: record.level,
            line,
            color_range,
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn fixed_record(level: LogLevel, message: &str) -> LogRecord {
        let timestamp = Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(7);
        LogRecord {
            level,
            logger_name: "svc".to_string(),
            message: message.to_string(),
            timestamp,
            thread_id: "42".to_string(),
        }
    }

    #[test]
    fn test_default_pattern_layout() {
        let record = fixed_record(LogLevel::Warn, "disk almost full");
        let formatted = Pattern::default().format(&record);

        assert!(formatted.line.starts_with("[2025-01-08 10:30:45.007 "));
        assert!(formatted
            .line
            .ends_with("] [svc] [tid 42] [warning] disk almost full"));
    }

    #[test]
    fn test_color_range_covers_level() {
        let record = fixed_record(LogLevel::Error, "boom");
        let formatted = Pattern::new("[%^%l%$] %v").format(&record);

        assert_eq!(formatted.line, "[error] boom");
        let range = formatted.color_range.expect("color range");
        assert_eq!(&formatted.line[range], "error");
    }

    #[test]
    fn test_unterminated_color_range_runs_to_end() {
        let record = fixed_record(LogLevel::Info, "msg");
        let formatted = Pattern::new("%L %^%v").format(&record);

        assert_eq!(formatted.line, "I msg");
        assert_eq!(formatted.color_range, Some(2..5));
    }

    #[test]
    fn test_no_color_flags_means_no_range() {
        let record = fixed_record(LogLevel::Info, "msg");
        let formatted = Pattern::new("%v").format(&record);
        assert_eq!(formatted.color_range, None);
    }

    #[test]
    fn test_literal_and_unknown_flags() {
        let record = fixed_record(LogLevel::Debug, "m");
        let formatted = Pattern::new("100%% %q %v%").format(&record);
        assert_eq!(formatted.line, "100% %q m%");
    }

    #[test]
    fn test_utc_offset_shape() {
        let record = fixed_record(LogLevel::Info, "m");
        let formatted = Pattern::new("%z").format(&record);
        let offset = formatted.line;

        assert_eq!(offset.len(), 6);
        assert!(offset.starts_with('+') || offset.starts_with('-'));
        assert_eq!(&offset[3..4], ":");
    }

    #[test]
    fn test_as_str_keeps_source() {
        assert_eq!(Pattern::default().as_str(), DEFAULT_PATTERN);
    }
}
