//! Criterion benchmark for ASCII payload encoding
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use packettest::{decode_ascii, Payload};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("ascii");

    for size in [0usize, 79, 1500, 65507].iter() {
        let text = "a".repeat(*size);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &text, |b, text| {
            b.iter(|| Payload::from_ascii(black_box(text)))
        });

        let bytes = text.clone().into_bytes();
        group.bench_with_input(BenchmarkId::new("decode", size), &bytes, |b, bytes| {
            b.iter(|| decode_ascii(black_box(bytes)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
