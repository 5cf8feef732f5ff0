//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::cell::RefCell;

// Thread-local cache for the thread id to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Get cached numeric thread id, computing and caching it on first access
fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| {
                // `ThreadId` only exposes its number through Debug: "ThreadId(7)"
                let raw = format!("{:?}", std::thread::current().id());
                raw.trim_start_matches("ThreadId(")
                    .trim_end_matches(')')
                    .to_string()
            })
            .clone()
    })
}

/// A single message on its way from a logger to its sinks
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub logger_name: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub thread_id: String,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a message can never forge an extra line in a log file.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, logger_name: &str, message: &str) -> Self {
        Self {
            level,
            logger_name: logger_name.to_string(),
            message: Self::sanitize_message(message),
            timestamp: Local::now(),
            thread_id: get_thread_id(),
        }
    }
}
