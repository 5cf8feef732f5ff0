//! Basic facade usage example
//!
//! Demonstrates registering console loggers, severity thresholds and the
//! formatting macros.
//!
//! Run with: cargo run --example basic_usage

use logger_facade::prelude::*;
use logger_facade::{info, warn};

fn main() -> Result<()> {
    println!("=== Logger Facade - Basic Usage Example ===\n");

    let system = LogSystem::default();

    // Register a console-only logger
    let spec = LoggerSpec::new("demo", Severity::Trace).with_sink(SinkSpec::console());
    let logger = system.register(&spec)?;

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.critical("This is a critical message");

    println!("\n2. Re-registering with an INFO threshold:");
    let logger = system.register(&LoggerSpec::new("demo", Severity::Info).with_sink(SinkSpec::console()))?;
    logger.trace("Trace message (hidden)");
    logger.debug("Debug message (hidden)");
    logger.info("Info message (visible)");
    logger.warn("Warning message (visible)");

    println!("\n3. Formatting macros:");
    let port = 8080;
    info!(logger, "Listening on port {}", port);
    warn!(logger, "{} of {} workers ready", 3, 4);

    println!("\n4. Looking up an unknown name is silent:");
    system.get("nobody").critical("You will not see this");

    println!("\n5. Process-wide API:");
    let global = logger_facade::register_new(&LoggerSpec::new("global_demo", Severity::Info).with_sink(SinkSpec::console()))?;
    global.info("Registered in the process-wide system");
    logger_facade::get("global_demo").warn("Found again by name");

    // The process-wide system is never dropped; flush before leaving main
    logger_facade::flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
