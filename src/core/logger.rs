//! Backend logger implementation

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    log_record::LogRecord,
    pattern::Pattern,
    sink::{BoundSink, SinkHandle},
};
use std::sync::Arc;

/// A named logger writing synchronously to its bound sinks.
///
/// The threshold and sink list are fixed at construction; there are no
/// setters. Build one with [`Logger::builder`].
pub struct Logger {
    name: String,
    level: LogLevel,
    flush_level: LogLevel,
    sinks: Vec<BoundSink>,
    pattern: Arc<Pattern>,
}

impl Logger {
    /// Create a builder for a logger named `name`
    ///
    /// # Example
    /// ```
    /// use logger_facade::core::{LogLevel, Logger};
    ///
    /// let logger = Logger::builder("svc").level(LogLevel::Debug).build().unwrap();
    /// assert_eq!(logger.name(), "svc");
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Records at or above this level flush every sink right after writing
    pub fn flush_level(&self) -> LogLevel {
        self.flush_level
    }

    pub fn sinks(&self) -> &[BoundSink] {
        &self.sinks
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[inline]
    pub fn should_log(&self, level: LogLevel) -> bool {
        self.level.allows(level)
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.should_log(level) {
            return;
        }

        let record = LogRecord::new(level, &self.name, message);
        let formatted = self.pattern.format(&record);

        // Per-sink panic isolation: one broken sink must not silence the rest
        for (idx, bound) in self.sinks.iter().enumerate() {
            if !bound.should_write(level) {
                continue;
            }

            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                bound.sink().write(&formatted)
            }));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Logger '{}' sink #{} ({}) failed: {}",
                        self.name,
                        idx,
                        bound.sink().name(),
                        e
                    );
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Logger '{}' sink #{} panicked: {}. \
                         Other sinks continue to function.",
                        self.name,
                        idx,
                        panic_message(panic_info.as_ref())
                    );
                }
            }
        }

        if self.flush_level.allows(level) {
            if let Err(e) = self.flush() {
                eprintln!("[LOGGER ERROR] Logger '{}' failed to flush: {}", self.name, e);
            }
        }
    }

    /// Flush every sink, reporting the first failure after trying them all
    pub fn flush(&self) -> Result<()> {
        let mut first_error = None;
        for bound in &self.sinks {
            if let Err(e) = bound.sink().flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    #[inline]
    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: &str) {
        self.log(LogLevel::Critical, message);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("flush_level", &self.flush_level)
            .field("sinks", &self.sinks)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use logger_facade::core::{LogLevel, Logger, Pattern};
/// use logger_facade::sinks::ConsoleSink;
/// use std::sync::Arc;
///
/// let console = Arc::new(ConsoleSink::stdout());
/// let logger = Logger::builder("svc")
///     .level(LogLevel::Debug)
///     .sink(console, LogLevel::Trace)
///     .pattern(Pattern::new("%l %v"))
///     .build()
///     .unwrap();
/// logger.info("ready");
/// ```
pub struct LoggerBuilder {
    name: String,
    level: LogLevel,
    flush_level: LogLevel,
    sinks: Vec<BoundSink>,
    pattern: Option<Arc<Pattern>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::Info,
            flush_level: LogLevel::Off,
            sinks: Vec::new(),
            pattern: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Flush all sinks after any record at or above `level`
    ///
    /// `Off` (the default) leaves flushing to explicit calls.
    #[must_use = "builder methods return a new value"]
    pub fn flush_on(mut self, level: LogLevel) -> Self {
        self.flush_level = level;
        self
    }

    /// Attach a sink with its own threshold
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: SinkHandle, level: LogLevel) -> Self {
        self.sinks.push(BoundSink::new(sink, level));
        self
    }

    /// Attach already bound sinks, keeping their order
    #[must_use = "builder methods return a new value"]
    pub fn sinks(mut self, sinks: impl IntoIterator<Item = BoundSink>) -> Self {
        self.sinks.extend(sinks);
        self
    }

    /// Set the rendering pattern
    #[must_use = "builder methods return a new value"]
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(Arc::new(pattern));
        self
    }

    /// Share an already parsed pattern with other loggers
    #[must_use = "builder methods return a new value"]
    pub fn shared_pattern(mut self, pattern: Arc<Pattern>) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Build the Logger
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the name is empty
    pub fn build(self) -> Result<Logger> {
        if self.name.is_empty() {
            return Err(LoggerError::config("Logger", "logger name must not be empty"));
        }

        Ok(Logger {
            name: self.name,
            level: self.level,
            flush_level: self.flush_level,
            sinks: self.sinks,
            pattern: self.pattern.unwrap_or_default(),
        })
    }
}
