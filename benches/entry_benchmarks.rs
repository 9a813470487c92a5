//! Criterion benchmarks for svclog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use svclog::payload::HttpRequestPayload;
use svclog::prelude::*;
use svclog::TimeSource;

fn quiet_logger() -> Logger {
    // Writing to io::sink keeps the encoder in the measurement and the
    // terminal out of it.
    let sink = JsonSink::with_writer(Box::new(std::io::sink()), TimeSource::System);
    Logger::with_sink(
        Config {
            app_name: "benchApp".to_string(),
            version: "v1.0.0".to_string(),
            ..Config::default()
        },
        Arc::new(sink),
    )
}

fn bench_plain_entry(c: &mut Criterion) {
    let mut group = c.benchmark_group("plain_entry");
    group.throughput(Throughput::Elements(1));

    let logger = quiet_logger();

    group.bench_function("info_write", |b| {
        b.iter(|| {
            logger.info(black_box("Info message")).write();
        });
    });

    group.finish();
}

fn bench_enriched_entry(c: &mut Criterion) {
    let mut group = c.benchmark_group("enriched_entry");
    group.throughput(Throughput::Elements(1));

    let logger = quiet_logger();

    group.bench_function("five_fields", |b| {
        b.iter(|| {
            logger
                .info(black_box("Request processed"))
                .with_field("user_id", 12345_i64)
                .with_field("latency_ms", 42.5)
                .with_field("status", 200_i64)
                .with_field("region", "eu-west-1")
                .with_app_data("shard", 7_i64)
                .write();
        });
    });

    group.bench_function("http_request", |b| {
        let request = HttpRequestPayload {
            method: "POST".to_string(),
            path: "/api/{resource}".to_string(),
            remote_ip: "192.168.1.1".to_string(),
            body: "{\"key\": \"value\"}".repeat(16),
            request_id: "unique-request-id".to_string(),
            ..Default::default()
        };

        b.iter(|| {
            logger
                .http(black_box("Request received"), Some(&request), None)
                .write();
        });
    });

    group.finish();
}

fn bench_builder_branching(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder_branching");
    group.throughput(Throughput::Elements(2));

    let logger = quiet_logger();

    group.bench_function("clone_two_branches", |b| {
        b.iter(|| {
            let base = logger.info("shared").with_field("common", "yes");
            base.clone().with_field("x", 1_i64).write();
            base.clone().with_field("y", 2_i64).write();
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_plain_entry,
    bench_enriched_entry,
    bench_builder_branching
);
criterion_main!(benches);
