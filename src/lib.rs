//! # Logger Facade
//!
//! A logging facade over a small synchronous backend. Application code
//! depends on the [`LogFacade`] trait; loggers are described declaratively
//! with [`LoggerSpec`] and registered by name in a [`LogSystem`].
//!
//! ## Features
//!
//! - **Named Loggers**: A name-keyed registry; re-registering replaces
//! - **Shared Console**: Every console sink of a system is one handle
//! - **Rotating Files**: Size-capped files, newest N kept
//! - **Thread Safe**: Registration and logging from any thread
//!
//! ```no_run
//! use logger_facade::prelude::*;
//! use logger_facade::info;
//!
//! let logger = logger_facade::register_default("bidder").unwrap();
//! logger.info("started");
//! info!(logger, "listening on port {}", 8080);
//!
//! // The process-wide system is never dropped; write out buffered records
//! logger_facade::flush().unwrap();
//! ```

pub mod core;
pub mod facade;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{LoggerError, Result};
    pub use crate::facade::{
        LogFacade, LogFacadeExt, LogSystem, LogSystemConfig, LoggerHandle, LoggerSpec, Severity,
        SinkKind, SinkSpec,
    };
}

pub use crate::core::{LogLevel, Logger, LoggerError, Result};
pub use facade::{
    flush, get, global, init, init_with, register_default, register_new, LogFacade, LogFacadeExt,
    LogSystem, LogSystemBuilder, LogSystemConfig, LoggerHandle, LoggerSpec, Severity, SinkKind,
    SinkSpec,
};
pub use sinks::{ConsoleSink, RotatingFileSink};
