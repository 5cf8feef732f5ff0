//! Criterion benchmarks for logger_facade

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use logger_facade::core::{LogLevel, LogRecord, Pattern, DEFAULT_PATTERN};
use logger_facade::prelude::*;
use logger_facade::sinks::ConsoleSink;
use std::sync::Arc;

fn quiet_system(dir: &std::path::Path) -> LogSystem {
    LogSystem::builder()
        .config(LogSystemConfig {
            default_log_directory: dir.to_path_buf(),
            use_colors: false,
            ..LogSystemConfig::default()
        })
        .console(Arc::new(ConsoleSink::with_writer(std::io::sink(), false)))
        .build()
}

// ============================================================================
// Registration Benchmarks
// ============================================================================

fn bench_registration(c: &mut Criterion) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let system = quiet_system(temp_dir.path());
    let console_only = LoggerSpec::new("bench", Severity::Info).with_sink(SinkSpec::console());

    let mut group = c.benchmark_group("registration");
    group.throughput(Throughput::Elements(1));

    group.bench_function("console_only", |b| {
        b.iter(|| black_box(system.register(&console_only).expect("register")));
    });

    group.bench_function("lookup_hit", |b| {
        b.iter(|| black_box(system.get(black_box("bench"))));
    });

    group.bench_function("lookup_miss", |b| {
        b.iter(|| black_box(system.get(black_box("missing"))));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let system = quiet_system(temp_dir.path());

    let console = system
        .register(&LoggerSpec::new("console", Severity::Info).with_sink(SinkSpec::console()))
        .expect("register console");
    let file = system
        .register(&LoggerSpec::new("file", Severity::Info).with_sink(SinkSpec::file()))
        .expect("register file");

    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    group.bench_function("console_info", |b| {
        b.iter(|| console.info(black_box("benchmark message")));
    });

    group.bench_function("filtered_debug", |b| {
        b.iter(|| console.debug(black_box("filtered out")));
    });

    group.bench_function("file_info", |b| {
        b.iter(|| file.info(black_box("benchmark message")));
    });

    group.bench_function("detached_handle", |b| {
        let ghost = system.get("missing");
        b.iter(|| ghost.info(black_box("goes nowhere")));
    });

    group.finish();
}

// ============================================================================
// Pattern Benchmarks
// ============================================================================

fn bench_pattern(c: &mut Criterion) {
    let pattern = Pattern::new(DEFAULT_PATTERN);
    let record = LogRecord::new(LogLevel::Info, "bench", "a typical log message of moderate size");

    c.bench_function("pattern_default_format", |b| {
        b.iter(|| black_box(pattern.format(black_box(&record))));
    });
}

criterion_group!(benches, bench_registration, bench_logging, bench_pattern);
criterion_main!(benches);
