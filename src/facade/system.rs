//! Log system context: shared console, pattern, flusher and registry

use super::config::{LogSystemConfig, LoggerSpec};
use super::handle::LoggerHandle;
use super::level_map::to_backend;
use super::sink_factory::SinkFactory;
use crate::core::{Logger, Pattern, PeriodicFlusher, Registry, Result, SinkHandle};
use crate::sinks::ConsoleSink;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// Constructs the shared console sink on first initialization
pub type ConsoleFactory = Box<dyn Fn(&LogSystemConfig) -> SinkHandle + Send + Sync>;

/// State created once per log system on first use and never re-created
pub struct ProcessLogState {
    console: SinkHandle,
    pattern: Arc<Pattern>,
    flusher: PeriodicFlusher,
}

impl ProcessLogState {
    /// The console sink shared by every logger of the system
    pub fn console(&self) -> &SinkHandle {
        &self.console
    }

    pub fn pattern(&self) -> &Arc<Pattern> {
        &self.pattern
    }

    pub fn flush_interval(&self) -> Duration {
        self.flusher.interval()
    }
}

/// Owns everything loggers share.
///
/// The process entry point usually creates one (or uses
/// [`global`](crate::facade::global::global)) and registers loggers through
/// it. Initialization of the shared state is lazy and happens exactly once,
/// whichever thread gets there first.
///
/// # Example
///
/// ```no_run
/// use logger_facade::{LogFacadeExt, LogSystem, LoggerSpec, Severity, SinkSpec};
///
/// let system = LogSystem::default();
/// let spec = LoggerSpec::new("svc", Severity::Debug)
///     .with_sink(SinkSpec::console())
///     .with_sink(SinkSpec::file().with_directory("/tmp/logs"));
/// let logger = system.register(&spec).unwrap();
/// logger.info("service started");
/// ```
pub struct LogSystem {
    config: LogSystemConfig,
    console_factory: ConsoleFactory,
    state: OnceLock<ProcessLogState>,
    registry: Arc<Registry>,
}

impl LogSystem {
    pub fn new(config: LogSystemConfig) -> Self {
        Self::builder().config(config).build()
    }

    #[must_use]
    pub fn builder() -> LogSystemBuilder {
        LogSystemBuilder::new()
    }

    pub fn config(&self) -> &LogSystemConfig {
        &self.config
    }

    /// Create the shared console, pattern and flusher if not done yet
    pub fn ensure_initialized(&self) -> &ProcessLogState {
        self.state.get_or_init(|| ProcessLogState {
            console: (self.console_factory)(&self.config),
            pattern: Arc::new(Pattern::new(&self.config.pattern)),
            flusher: PeriodicFlusher::start(&self.registry, self.config.flush_interval()),
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    /// Build a logger from `spec` and install it under `spec.name`,
    /// replacing any logger already registered under that name.
    ///
    /// # Errors
    ///
    /// Fails if `spec` is invalid or a file sink cannot be opened; nothing
    /// is registered in that case.
    pub fn register(&self, spec: &LoggerSpec) -> Result<LoggerHandle> {
        let state = self.ensure_initialized();
        spec.validate()?;

        let sinks = SinkFactory::new(&state.console, &self.config).build(&spec.sinks, &spec.name)?;

        let logger = Arc::new(
            Logger::builder(spec.name.as_str())
                .level(to_backend(spec.log_level))
                .flush_on(to_backend(self.config.flush_on))
                .sinks(sinks)
                .shared_pattern(Arc::clone(&state.pattern))
                .build()?,
        );

        self.registry.register(Arc::clone(&logger));
        Ok(LoggerHandle::new(logger))
    }

    /// Register `name` with [`LoggerSpec::canonical`]
    pub fn register_default(&self, name: &str) -> Result<LoggerHandle> {
        self.register(&LoggerSpec::canonical(name))
    }

    /// Handle for `name`; silent if nothing is registered under it
    pub fn get(&self, name: &str) -> LoggerHandle {
        self.try_get(name).unwrap_or_default()
    }

    pub fn try_get(&self, name: &str) -> Option<LoggerHandle> {
        self.registry.get(name).map(LoggerHandle::new)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Flush every registered logger now
    pub fn flush_all(&self) -> Result<()> {
        self.registry.flush_all()
    }
}

impl Default for LogSystem {
    fn default() -> Self {
        Self::new(LogSystemConfig::default())
    }
}

fn stdout_console(config: &LogSystemConfig) -> SinkHandle {
    Arc::new(ConsoleSink::stdout().with_colors(config.use_colors))
}

/// Builder for a [`LogSystem`]
pub struct LogSystemBuilder {
    config: LogSystemConfig,
    console_factory: ConsoleFactory,
}

impl LogSystemBuilder {
    pub fn new() -> Self {
        Self {
            config: LogSystemConfig::default(),
            console_factory: Box::new(stdout_console),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LogSystemConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace how the shared console sink is constructed
    ///
    /// The factory runs at most once per system.
    #[must_use = "builder methods return a new value"]
    pub fn console_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&LogSystemConfig) -> SinkHandle + Send + Sync + 'static,
    {
        self.console_factory = Box::new(factory);
        self
    }

    /// Use an existing sink as the shared console
    #[must_use = "builder methods return a new value"]
    pub fn console(self, sink: SinkHandle) -> Self {
        self.console_factory(move |_| Arc::clone(&sink))
    }

    pub fn build(self) -> LogSystem {
        LogSystem {
            config: self.config,
            console_factory: self.console_factory,
            state: OnceLock::new(),
            registry: Arc::new(Registry::new()),
        }
    }
}

impl Default for LogSystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}
