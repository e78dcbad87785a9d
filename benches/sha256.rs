use sha256_digest::hash::sha256::compress::compress_block;
use sha256_digest::hash::sha256::{H256_INIT, sha256};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha256(c: &mut Criterion) {
    c.bench_function("sha256 64 bytes", |b| {
        b.iter(|| sha256(black_box(&[0u8; 64])))
    });

    c.bench_function("compress_block", |b| {
        b.iter(|| compress_block(black_box(&[0u8; 64]), black_box(H256_INIT)))
    });
}

pub fn bench_sha256_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256 sizes");

    for size in [64usize, 1024, 16 * 1024] {
        let data = vec![0xA5u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| sha256(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha256, bench_sha256_sizes);
criterion_main!(benches);
