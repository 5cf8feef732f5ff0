//! Process-wide log system and free-function API
//!
//! For code that prefers the call style `facade::register_new(&spec)` over
//! passing a [`LogSystem`] around. The global system is created on first use
//! with default settings unless [`init_with`] ran earlier.
//!
//! The global system is never dropped. Records below the configured
//! `flush_on` severity stay buffered until the next periodic flush, so call
//! [`flush`] before the process exits.

use super::config::{LogSystemConfig, LoggerSpec};
use super::handle::LoggerHandle;
use super::system::LogSystem;
use crate::core::Result;
use std::sync::OnceLock;

static GLOBAL: OnceLock<LogSystem> = OnceLock::new();

/// The process-wide log system
pub fn global() -> &'static LogSystem {
    GLOBAL.get_or_init(LogSystem::default)
}

/// Install the process-wide system with `config` and initialize it.
///
/// Returns `false` if a global system already existed; its settings (flush
/// interval included) are kept and `config` is ignored.
pub fn init_with(config: LogSystemConfig) -> bool {
    let mut installed = false;
    let system = GLOBAL.get_or_init(|| {
        installed = true;
        LogSystem::new(config)
    });
    system.ensure_initialized();
    installed
}

/// Initialize the process-wide system with default settings
pub fn init() {
    global().ensure_initialized();
}

/// Register a logger in the process-wide system
pub fn register_new(spec: &LoggerSpec) -> Result<LoggerHandle> {
    global().register(spec)
}

/// Register `name` with the canonical console + file configuration
pub fn register_default(name: &str) -> Result<LoggerHandle> {
    global().register_default(name)
}

/// Look up a logger in the process-wide system; silent if absent
pub fn get(name: &str) -> LoggerHandle {
    global().get(name)
}

/// Flush every logger of the process-wide system.
///
/// Call before exiting; statics are not dropped, so nothing else writes
/// out records still buffered in file sinks.
pub fn flush() -> Result<()> {
    match GLOBAL.get() {
        Some(system) => system.flush_all(),
        None => Ok(()),
    }
}
