//! Benchmarks for the entry log
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use moonlit::journal::EntryLog;
use moonlit::notebook::{render, Theme};

fn filled_log(count: usize) -> EntryLog {
    let mut log = EntryLog::new();
    for i in 0..count {
        log.append(&format!("  entry number {}  ", i)).unwrap();
    }
    log
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("append_{}", size), |b| {
            b.iter(|| filled_log(black_box(size)))
        });
    }

    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    let theme = Theme::default();

    for size in [100, 1000, 10000] {
        let log = filled_log(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("list_most_recent_first_{}", size), |b| {
            b.iter(|| black_box(&log).list_most_recent_first().count())
        });

        group.bench_function(format!("render_html_{}", size), |b| {
            b.iter(|| render(black_box(&log), &theme).to_html("/notebook/bench"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_append, bench_read);
criterion_main!(benches);
