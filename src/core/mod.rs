//! Backend logger types and traits

pub mod error;
pub mod flusher;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod pattern;
pub mod registry;
pub mod sink;

pub use error::{LoggerError, Result};
pub use flusher::{PeriodicFlusher, DEFAULT_FLUSH_INTERVAL};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use pattern::{FormattedRecord, Pattern, DEFAULT_PATTERN};
pub use registry::Registry;
pub use sink::{BoundSink, Sink, SinkHandle};
