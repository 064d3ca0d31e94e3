use b64_core::{decode, encode};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn payload(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    for len in [64usize, 4 * 1024, 256 * 1024] {
        let text = payload(len);
        let b64 = encode(&text);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("encode", len), &text, |b, t| {
            b.iter(|| encode(black_box(t)))
        });
        group.bench_with_input(BenchmarkId::new("decode", len), &b64, |b, t| {
            b.iter(|| decode(black_box(t)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
