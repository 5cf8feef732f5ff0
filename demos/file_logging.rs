//! File logging example
//!
//! Demonstrates console + rotating file sinks with per-sink thresholds.
//!
//! Run with: cargo run --example file_logging

use logger_facade::prelude::*;
use std::fs;

fn main() -> Result<()> {
    println!("=== Logger Facade - File Logging Example ===\n");

    let log_dir = std::env::temp_dir().join("logger_facade_demo");
    let system = LogSystem::new(LogSystemConfig {
        default_log_directory: log_dir.clone(),
        flush_interval_secs: 1,
        ..LogSystemConfig::default()
    });

    let spec = LoggerSpec::new("file_demo", Severity::Debug)
        .with_sink(SinkSpec::console().with_level(Severity::Debug))
        .with_sink(
            SinkSpec::file()
                .with_level(Severity::Warning)
                .with_max_size_mb(1)
                .with_max_count(2),
        );
    let logger = system.register(&spec)?;

    logger.debug("Console only");
    logger.info("Console only");
    logger.warn("Console and file");
    logger.error("Console and file");
    logger.info("Multi-line\ninput is escaped");
    logger.flush();

    let path = log_dir.join("file_demo");
    println!("\nContents of {}:", path.display());
    println!("{}", fs::read_to_string(&path)?);

    println!("=== Example completed successfully! ===");

    Ok(())
}
