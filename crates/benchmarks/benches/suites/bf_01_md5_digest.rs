//! # BF-01 MD5 Digest Benchmarks
//!
//! - One-shot digest from 0 bytes to 64 KiB
//! - Streaming digest with awkward chunk sizes
//! - Document-name sized inputs (the filter's hot path)

use bf_01_md5_digest::{md5_digest, Md5Context};
use bf_benchmarks::utils::{document_names, random_values};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};

fn digest_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("bf-01/digest/one_shot");

    for size in [0usize, 55, 64, 1024, 8192, 65_536] {
        let input = random_values(1, size, size as u64).remove(0);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| md5_digest(black_box(input)))
        });
    }

    group.finish();
}

fn digest_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("bf-01/digest/streaming");
    let input = random_values(1, 65_536, 1).remove(0);
    group.throughput(Throughput::Bytes(input.len() as u64));

    for chunk in [1usize, 7, 63, 64, 4096] {
        group.bench_with_input(BenchmarkId::new("chunk", chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let mut ctx = Md5Context::new();
                for piece in input.chunks(chunk) {
                    ctx.update(black_box(piece));
                }
                ctx.finalize()
            })
        });
    }

    group.finish();
}

fn digest_document_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("bf-01/digest/document_names");
    let names = document_names(1000);
    group.throughput(Throughput::Elements(names.len() as u64));

    group.bench_function("1000_names", |b| {
        b.iter(|| {
            for name in &names {
                black_box(md5_digest(name));
            }
        })
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    digest_one_shot(c);
    digest_streaming(c);
    digest_document_names(c);
}
