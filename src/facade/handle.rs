//! Facade capability trait and the backend adapter

use super::level_map::{from_backend, to_backend};
use super::severity::Severity;
use crate::core::Logger;
use std::sync::Arc;

/// The surface application code depends on.
///
/// Only two primitives; everything else is sugar from [`LogFacadeExt`] and
/// the formatting macros.
pub trait LogFacade: Send + Sync {
    fn log(&self, level: Severity, message: &str);
    fn flush(&self);
}

/// Fixed-level shortcuts over [`LogFacade::log`]
///
/// Implemented for every `LogFacade`, including trait objects.
pub trait LogFacadeExt: LogFacade {
    #[inline]
    fn critical(&self, message: &str) {
        self.log(Severity::Critical, message);
    }

    #[inline]
    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    #[inline]
    fn warn(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    #[inline]
    fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    #[inline]
    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    #[inline]
    fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    fn trace(&self, message: &str) {
        self.log(Severity::Trace, message);
    }
}

impl<T: LogFacade + ?Sized> LogFacadeExt for T {}

/// Adapter from the facade to a backend [`Logger`].
///
/// A handle obtained for a name that was never registered wraps nothing and
/// silently ignores every call.
#[derive(Clone, Debug, Default)]
pub struct LoggerHandle {
    logger: Option<Arc<Logger>>,
}

impl LoggerHandle {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self {
            logger: Some(logger),
        }
    }

    /// A handle that logs nothing
    pub fn detached() -> Self {
        Self { logger: None }
    }

    pub fn is_registered(&self) -> bool {
        self.logger.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.logger.as_deref().map(Logger::name)
    }

    /// Threshold of the wrapped logger
    pub fn level(&self) -> Option<Severity> {
        self.logger.as_deref().map(|l| from_backend(l.level()))
    }

    /// The wrapped backend logger
    pub fn backend(&self) -> Option<&Arc<Logger>> {
        self.logger.as_ref()
    }

    pub fn is_enabled(&self, level: Severity) -> bool {
        self.logger
            .as_deref()
            .is_some_and(|l| l.should_log(to_backend(level)))
    }
}

impl From<Arc<Logger>> for LoggerHandle {
    fn from(logger: Arc<Logger>) -> Self {
        Self::new(logger)
    }
}

impl LogFacade for LoggerHandle {
    fn log(&self, level: Severity, message: &str) {
        if let Some(logger) = &self.logger {
            logger.log(to_backend(level), message);
        }
    }

    fn flush(&self) {
        if let Some(logger) = &self.logger {
            if let Err(e) = logger.flush() {
                eprintln!("[LOGGER ERROR] Failed to flush logger '{}': {}", logger.name(), e);
            }
        }
    }
}
