//! Criterion benchmarks for malalog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use malalog::appenders::console::paint;
use malalog::prelude::*;
use malalog::template;

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.throughput(Throughput::Elements(1));

    let plain = Message::from("Server listening on port 8080");
    group.bench_function("plain", |b| {
        b.iter(|| black_box(&plain).render());
    });

    let templated = template!("GET ", "/api/v1/users", " returned ", 200, " in ", 12, "ms");
    group.bench_function("template", |b| {
        b.iter(|| black_box(&templated).render());
    });

    let record = LogRecord::new(Channel::Pacha, "Server listening on port 8080");
    group.bench_function("format_line", |b| {
        b.iter(|| black_box(&record).format_line(&TimestampFormat::Iso8601));
    });

    group.bench_function("paint", |b| {
        b.iter(|| paint(Channel::Chuvapp.color(), black_box("[2025-01-08T10:30:45.123Z] boom")));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let console_only = LogDispatcher::builder()
        .console(ConsoleAppender::with_colors(true).with_writers(std::io::sink(), std::io::sink()))
        .build()
        .expect("Failed to create dispatcher");

    group.bench_function("console", |b| {
        b.to_async(&rt)
            .iter(|| console_only.info(black_box("Benchmark message")));
    });

    let file_only = LogDispatcher::builder()
        .console(ConsoleAppender::new().with_writers(std::io::sink(), std::io::sink()))
        .enable_console(false)
        .file_path(temp_dir.path().join("bench.log"))
        .build()
        .expect("Failed to create dispatcher");

    group.bench_function("file", |b| {
        b.to_async(&rt)
            .iter(|| file_only.info(black_box("Benchmark message")));
    });

    group.finish();
}

criterion_group!(benches, bench_rendering, bench_dispatch);
criterion_main!(benches);
