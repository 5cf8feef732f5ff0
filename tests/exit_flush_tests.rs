//! Exit-time durability of the process-wide log system
//!
//! The global system lives in a static and is never dropped. Each test
//! re-runs itself in a child process that logs through the free-function API
//! and exits immediately; the parent then inspects the file the child left
//! behind.

use logger_facade::{LogFacadeExt, LogSystemConfig, LoggerSpec, Severity, SinkSpec};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const CHILD_DIR_VAR: &str = "LOGGER_FACADE_EXIT_TEST_DIR";

/// Set when running as the child; holds the log directory
fn child_dir() -> Option<PathBuf> {
    env::var_os(CHILD_DIR_VAR).map(PathBuf::from)
}

fn init_global(dir: &Path) {
    assert!(logger_facade::init_with(LogSystemConfig {
        default_log_directory: dir.to_path_buf(),
        use_colors: false,
        ..LogSystemConfig::default()
    }));
}

/// Re-run `test_name` alone in a child process rooted at `dir`
fn run_child(test_name: &str, dir: &Path) {
    let exe = env::current_exe().expect("Failed to locate test binary");
    let output = Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_DIR_VAR, dir)
        .output()
        .expect("Failed to spawn child process");

    assert!(
        output.status.success(),
        "child failed: {}\n{}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_critical_record_survives_exit() {
    if let Some(dir) = child_dir() {
        init_global(&dir);
        let spec = LoggerSpec::new("svc", Severity::Info).with_sink(SinkSpec::file());
        let logger = logger_facade::register_new(&spec).expect("Failed to register");
        logger.info("context before the failure");
        logger.critical("last words before exit");
        std::process::exit(0);
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    run_child("test_critical_record_survives_exit", temp_dir.path());

    let content = fs::read_to_string(temp_dir.path().join("svc")).expect("Failed to read log file");
    assert!(content.contains("context before the failure"), "record lost at exit: {:?}", content);
    assert!(content.contains("[critical] last words before exit"), "record lost at exit: {:?}", content);
}

#[test]
fn test_global_flush_writes_buffered_records() {
    if let Some(dir) = child_dir() {
        init_global(&dir);
        let logger = logger_facade::register_default("svc").expect("Failed to register");
        logger.info("buffered until flush");
        logger_facade::flush().expect("Failed to flush");
        std::process::exit(0);
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    run_child("test_global_flush_writes_buffered_records", temp_dir.path());

    let content = fs::read_to_string(temp_dir.path().join("svc")).expect("Failed to read log file");
    assert!(content.contains("[info] buffered until flush"), "record lost at exit: {:?}", content);
}

#[test]
fn test_unknown_logger_leaves_no_file() {
    if let Some(dir) = child_dir() {
        init_global(&dir);
        let logger = logger_facade::get("unregistered");
        logger.critical("silently dropped");
        logger_facade::flush().expect("Failed to flush");
        assert!(fs::read_dir(&dir).expect("read dir").next().is_none());
        std::process::exit(0);
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    run_child("test_unknown_logger_leaves_no_file", temp_dir.path());
}
