use criterion::{Criterion, criterion_group, criterion_main};
use sluglog::{Config, Fields, Logger, Registry, RotationPolicy};
use std::hint::black_box;
use tempfile::TempDir;

fn bench_file_logger(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let logger = Logger::builder("bench")
        .file(tmp.path().join("bench.log"))
        .policy(RotationPolicy::default())
        .done()
        .expect("failed to open log file")
        .build();
    let fields = Fields::new().with("worker", 3);

    c.bench_function("Logger::info (file)", |b| {
        b.iter(|| logger.info(black_box("benchmark log message"), fields.clone()));
    });

    logger.flush().expect("flush failed");
}

fn bench_filtered(c: &mut Criterion) {
    let logger = Logger::builder("quiet").level(sluglog::Level::Error).build();

    c.bench_function("Logger::debug (filtered)", |b| {
        b.iter(|| logger.debug(black_box("dropped"), Fields::new()));
    });
}

fn bench_registry_lookup(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let mut config = Config::default();
    config.general.log_root = Some(tmp.path().display().to_string());
    config.console.enabled = false;
    let registry = Registry::new(&config).expect("invalid config");
    registry.logger("Cached Service").expect("failed to create logger");

    c.bench_function("Registry::logger (cached)", |b| {
        b.iter(|| registry.logger(black_box("Cached Service")));
    });
}

criterion_group!(benches, bench_file_logger, bench_filtered, bench_registry_lookup);
criterion_main!(benches);
