//! Attribute store benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nvattr_bench::{fill, patterned_value, populated_store};
use nvattr_core::{AttrId, AttributeStore, StoreConfig};
use tempfile::TempDir;

/// Benchmark lookups of the last id as the medium grows.
fn bench_get_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_last_slot");

    for count in [1u8, 16, 64, 255].iter() {
        group.throughput(Throughput::Elements(u64::from(*count)));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let store = populated_store(count, 64);
            let last = AttrId::new(count - 1);

            b.iter(|| {
                let attr = store.get(black_box(last)).unwrap();
                black_box(attr);
            });
        });
    }

    group.finish();
}

/// Benchmark misses, which always scan the whole medium.
fn bench_get_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_miss");

    for count in [16u8, 64, 254].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let store = populated_store(count, 64);

            b.iter(|| {
                let result = store.get(black_box(AttrId::new(255)));
                black_box(result.is_err());
            });
        });
    }

    group.finish();
}

/// Benchmark in-place overwrite of an existing id.
fn bench_set_overwrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_overwrite");

    for size in [1usize, 4, 64, 255].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let store = populated_store(32, size);
            let value = patterned_value(size);

            b.iter(|| {
                let written = store.set(black_box(AttrId::new(31)), black_box(&value)).unwrap();
                black_box(written);
            });
        });
    }

    group.finish();
}

/// Benchmark set against a file medium, with and without sync.
fn bench_file_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_set");
    group.sample_size(20); // Sync is slow

    for sync in [false, true].iter() {
        let name = if *sync { "sync" } else { "no_sync" };
        group.bench_function(name, |b| {
            let temp_dir = TempDir::new().unwrap();
            let config = StoreConfig::default().sync_on_write(*sync);
            let store = AttributeStore::open_with_config(temp_dir.path().join("bench.nvm"), config);
            fill(&store, 16, 64);
            let value = patterned_value(64);

            b.iter(|| {
                let written = store.set(black_box(AttrId::new(8)), black_box(&value)).unwrap();
                black_box(written);
            });
        });
    }

    group.finish();
}

/// Benchmark filling an empty medium with every id.
fn bench_fill_all_ids(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_all_ids");
    group.sample_size(10);

    group.bench_function("inmemory_256x16", |b| {
        b.iter(|| {
            let store = AttributeStore::in_memory();
            fill(&store, 255, 16);
            store.set(AttrId::new(255), &patterned_value(16)).unwrap();
            black_box(store.slot_count().unwrap());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_get_scan,
    bench_get_miss,
    bench_set_overwrite,
    bench_file_set,
    bench_fill_all_ids,
);

criterion_main!(benches);
