//! Slot codec and backend benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use nvattr_bench::patterned_value;
use nvattr_core::{compute_checksum, AttrId, AttributeRecord, HostByteOrder, SLOT_SIZE};
use nvattr_storage::{InMemoryBackend, StorageBackend};

fn bench_checksum(c: &mut Criterion) {
    let value = patterned_value(255);

    let mut group = c.benchmark_group("checksum");
    group.throughput(Throughput::Bytes(255));
    group.bench_function("full_value", |b| {
        b.iter(|| black_box(compute_checksum(black_box(&value))));
    });
    group.finish();
}

fn bench_record_codec(c: &mut Criterion) {
    let value = patterned_value(128);
    let record = AttributeRecord::new(AttrId::new(1), &value, HostByteOrder::native()).unwrap();
    let encoded = record.encode();

    let mut group = c.benchmark_group("record");
    group.throughput(Throughput::Bytes(SLOT_SIZE as u64));
    group.bench_function("encode", |b| {
        b.iter(|| black_box(black_box(&record).encode()));
    });
    group.bench_function("decode", |b| {
        b.iter(|| black_box(AttributeRecord::decode(black_box(&encoded)).unwrap()));
    });
    group.finish();
}

fn bench_backend_slot_io(c: &mut Criterion) {
    let slot = [0xA5u8; SLOT_SIZE];

    let mut group = c.benchmark_group("inmemory_slot_io");
    group.throughput(Throughput::Bytes(SLOT_SIZE as u64));
    group.bench_function("write_at", |b| {
        let mut backend = InMemoryBackend::new();
        b.iter(|| black_box(backend.write_at(black_box(0), black_box(&slot)).unwrap()));
    });
    group.bench_function("read_at", |b| {
        let mut backend = InMemoryBackend::new();
        backend.write_at(0, &slot).unwrap();
        b.iter(|| black_box(backend.read_at(black_box(0), SLOT_SIZE).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_checksum, bench_record_codec, bench_backend_slot_io);
criterion_main!(benches);
