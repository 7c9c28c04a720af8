//! Value Encoding Benchmarks
//!
//! Measures the cost of packing and unpacking tagged Values.
//!
//! # Key Metrics
//!
//! - Encode/decode time: target a couple of instructions either way
//! - Tag dispatch: single mask-and-compare

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mote_core::{EnvRef, PairRef, Value};

// =============================================================================
// Encode Benchmarks
// =============================================================================

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    group.bench_function("int", |b| b.iter(|| black_box(Value::int(black_box(42)))));

    group.bench_function("pair", |b| {
        b.iter(|| black_box(PairRef::from_index(black_box(100)).value()))
    });

    group.bench_function("boolean", |b| {
        b.iter(|| black_box(Value::boolean(black_box(true))))
    });

    group.bench_function("env", |b| {
        b.iter(|| black_box(EnvRef::from_index(black_box(7)).value()))
    });

    group.finish();
}

// =============================================================================
// Decode Benchmarks
// =============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let int = Value::int(42);
    group.bench_function("as_int", |b| b.iter(|| black_box(black_box(int).as_int())));

    let pair = PairRef::from_index(100).value();
    group.bench_function("as_pair", |b| {
        b.iter(|| black_box(black_box(pair).as_pair().index()))
    });

    group.bench_function("tag", |b| b.iter(|| black_box(black_box(pair).tag())));

    group.bench_function("is_nil", |b| {
        b.iter(|| black_box(black_box(Value::NIL).is_nil()))
    });

    group.finish();
}

// =============================================================================
// Batch Operations
// =============================================================================

fn bench_batch_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_operations");

    group.bench_function("encode_decode_0_to_255", |b| {
        b.iter(|| {
            let mut sum = 0i32;
            for i in 0..256 {
                let v = Value::int(i);
                sum = sum.wrapping_add(i32::from(v.as_int()));
            }
            black_box(sum)
        })
    });

    group.finish();
}

// =============================================================================
// Criterion Groups
// =============================================================================

criterion_group!(
    value_encoding_benches,
    bench_encode,
    bench_decode,
    bench_batch_operations,
);

criterion_main!(value_encoding_benches);
