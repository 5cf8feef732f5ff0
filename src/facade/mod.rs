//! Logging facade: severities, specs, sink assembly and logger handles

pub mod config;
pub mod global;
pub mod handle;
pub mod level_map;
pub mod severity;
pub mod sink_factory;
pub mod system;

pub use config::{
    LogSystemConfig, LoggerSpec, SinkKind, SinkSpec, DEFAULT_LOG_DIRECTORY,
    DEFAULT_LOG_FILE_MAX_COUNT, DEFAULT_LOG_FILE_MAX_SIZE_MB,
};
pub use global::{flush, get, global, init, init_with, register_default, register_new};
pub use handle::{LogFacade, LogFacadeExt, LoggerHandle};
pub use level_map::{from_backend, to_backend};
pub use severity::Severity;
pub use sink_factory::{FileSinkSettings, SinkFactory};
pub use system::{ConsoleFactory, LogSystem, LogSystemBuilder, ProcessLogState};
