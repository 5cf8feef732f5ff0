//! Sink trait for log output destinations

use super::{error::Result, log_level::LogLevel, pattern::FormattedRecord};
use std::sync::Arc;

/// A log output destination.
///
/// Sinks are shared between loggers, so every method takes `&self` and
/// implementations synchronize internally.
pub trait Sink: Send + Sync {
    fn write(&self, record: &FormattedRecord) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}

pub type SinkHandle = Arc<dyn Sink>;

/// A sink attached to one logger together with that binding's threshold.
///
/// The same `SinkHandle` can appear in many bindings with different levels.
#[derive(Clone)]
pub struct BoundSink {
    sink: SinkHandle,
    level: LogLevel,
}

impl BoundSink {
    pub fn new(sink: SinkHandle, level: LogLevel) -> Self {
        Self { sink, level }
    }

    pub fn sink(&self) -> &SinkHandle {
        &self.sink
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn should_write(&self, level: LogLevel) -> bool {
        self.level.allows(level)
    }
}

impl std::fmt::Debug for BoundSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundSink")
            .field("sink", &self.sink.name())
            .field("level", &self.level)
            .finish()
    }
}
