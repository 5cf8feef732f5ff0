//! Assembly of live sinks from sink specs

use super::config::{LogSystemConfig, SinkKind, SinkSpec};
use super::level_map::to_backend;
use crate::core::{BoundSink, LoggerError, Result, SinkHandle};
use crate::sinks::RotatingFileSink;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Resolved parameters of one file sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSinkSettings {
    /// `<directory>/<owner>`
    pub path: PathBuf,
    pub max_size_bytes: u64,
    pub max_files: usize,
}

impl FileSinkSettings {
    /// Apply defaults to the optional fields of a file sink spec.
    ///
    /// Pure: nothing is touched on disk.
    pub fn resolve(spec: &SinkSpec, owner: &str, defaults: &LogSystemConfig) -> Result<Self> {
        let mut components = Path::new(owner).components();
        let single_component = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_component {
            return Err(LoggerError::config(
                "SinkSpec",
                format!("logger name '{}' cannot be used as a file name", owner),
            ));
        }

        let directory = spec
            .log_directory
            .as_deref()
            .unwrap_or(&defaults.default_log_directory);

        let size_mb = spec
            .log_file_max_size_mb
            .unwrap_or(defaults.default_max_file_size_mb);
        let max_size_bytes = size_mb.checked_mul(BYTES_PER_MB).ok_or_else(|| {
            LoggerError::config(
                "SinkSpec",
                format!("log_file_max_size_mb {} overflows a byte count", size_mb),
            )
        })?;

        let max_files = spec
            .log_file_max_count
            .unwrap_or(defaults.default_max_file_count) as usize;

        Ok(Self {
            path: directory.join(owner),
            max_size_bytes,
            max_files,
        })
    }
}

/// Turns sink specs into bound sinks for one logger.
///
/// Console entries all resolve to the same shared handle; every file entry
/// opens its own rotating file; Dlt and Syslog entries produce nothing.
pub struct SinkFactory<'a> {
    console: &'a SinkHandle,
    defaults: &'a LogSystemConfig,
}

impl<'a> SinkFactory<'a> {
    pub fn new(console: &'a SinkHandle, defaults: &'a LogSystemConfig) -> Self {
        Self { console, defaults }
    }

    /// Build the sinks for logger `owner`, preserving spec order
    ///
    /// # Errors
    ///
    /// Fails on the first file sink that cannot be resolved or opened
    pub fn build(&self, sinks: &[SinkSpec], owner: &str) -> Result<Vec<BoundSink>> {
        let mut built = Vec::with_capacity(sinks.len());

        for spec in sinks {
            let handle: SinkHandle = match spec.kind {
                SinkKind::Console => Arc::clone(self.console),
                SinkKind::File => {
                    let settings = FileSinkSettings::resolve(spec, owner, self.defaults)?;
                    Arc::new(RotatingFileSink::new(
                        &settings.path,
                        settings.max_size_bytes,
                        settings.max_files,
                    )?)
                }
                // Placeholders for remote destinations
                SinkKind::Dlt | SinkKind::Syslog => continue,
            };
            built.push(BoundSink::new(handle, to_backend(spec.log_level)));
        }

        Ok(built)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use crate::facade::severity::Severity;
    use crate::sinks::ConsoleSink;
    use tempfile::tempdir;

    fn defaults_in(dir: &Path) -> LogSystemConfig {
        LogSystemConfig {
            default_log_directory: dir.to_path_buf(),
            ..LogSystemConfig::default()
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let settings =
            FileSinkSettings::resolve(&SinkSpec::file(), "svc", &LogSystemConfig::default()).unwrap();

        assert_eq!(settings.path, Path::new("/var/log/bidrouter/").join("svc"));
        assert_eq!(settings.max_size_bytes, 1024 * 1024 * 1024);
        assert_eq!(settings.max_files, 3);
    }

    #[test]
    fn test_resolve_overrides() {
        let spec = SinkSpec::file()
            .with_directory("/tmp/x")
            .with_max_size_mb(2)
            .with_max_count(5);
        let settings = FileSinkSettings::resolve(&spec, "n", &LogSystemConfig::default()).unwrap();

        assert_eq!(settings.path, PathBuf::from("/tmp/x/n"));
        assert_eq!(settings.max_size_bytes, 2 * 1024 * 1024);
        assert_eq!(settings.max_files, 5);
    }

    #[test]
    fn test_canonical_file_sink_follows_system_defaults() {
        let dir = tempdir().unwrap();
        let canonical = crate::facade::config::LoggerSpec::canonical("svc");
        let settings = FileSinkSettings::resolve(&canonical.sinks[1], "svc", &defaults_in(dir.path())).unwrap();

        assert_eq!(settings.path, dir.path().join("svc"));
        assert_eq!(settings.max_size_bytes, 1024 * 1024 * 1024);
        assert_eq!(settings.max_files, 3);
    }

    #[test]
    fn test_resolve_rejects_overflowing_size() {
        let spec = SinkSpec::file().with_max_size_mb(u64::MAX);
        let err = FileSinkSettings::resolve(&spec, "n", &LogSystemConfig::default()).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_resolve_rejects_path_like_names() {
        let defaults = LogSystemConfig::default();
        for name in ["", "a/b", "..", "/abs"] {
            assert!(
                FileSinkSettings::resolve(&SinkSpec::file(), name, &defaults).is_err(),
                "name {:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_build_preserves_order_and_skips_placeholders() {
        let dir = tempdir().unwrap();
        let defaults = defaults_in(dir.path());
        let console: SinkHandle = Arc::new(ConsoleSink::stdout());
        let factory = SinkFactory::new(&console, &defaults);

        let specs = vec![
            SinkSpec::dlt(),
            SinkSpec::file().with_level(Severity::Error),
            SinkSpec::syslog(),
            SinkSpec::console().with_level(Severity::Debug),
        ];
        let sinks = factory.build(&specs, "svc").unwrap();

        assert_eq!(sinks.len(), 2);
        assert_eq!(sinks[0].sink().name(), "rotating_file");
        assert_eq!(sinks[0].level(), LogLevel::Error);
        assert!(Arc::ptr_eq(sinks[1].sink(), &console));
        assert_eq!(sinks[1].level(), LogLevel::Debug);
        assert!(dir.path().join("svc").exists());
    }

    #[test]
    fn test_duplicate_consoles_share_handle_and_files_do_not() {
        let dir = tempdir().unwrap();
        let defaults = defaults_in(dir.path());
        let console: SinkHandle = Arc::new(ConsoleSink::stdout());
        let factory = SinkFactory::new(&console, &defaults);

        let sinks = factory
            .build(
                &[
                    SinkSpec::console(),
                    SinkSpec::console(),
                    SinkSpec::file(),
                    SinkSpec::file(),
                ],
                "dup",
            )
            .unwrap();

        assert_eq!(sinks.len(), 4);
        assert!(Arc::ptr_eq(sinks[0].sink(), sinks[1].sink()));
        assert!(!Arc::ptr_eq(sinks[2].sink(), sinks[3].sink()));
    }

    #[test]
    fn test_build_propagates_file_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let defaults = LogSystemConfig::default();
        let console: SinkHandle = Arc::new(ConsoleSink::stdout());
        let factory = SinkFactory::new(&console, &defaults);

        let result = factory.build(&[SinkSpec::console(), SinkSpec::file().with_directory(&blocker)], "svc");
        assert!(result.is_err());
    }
}
