//! # BF-02 Membership Filter Benchmarks
//!
//! - Query latency for members and non-members across hash counts
//! - Replaying 10,000 document names (golden-file scale)
//! - Initialization cost as bitmap size grows
//! - Read throughput through `SharedBloomFilter` with concurrent readers

use std::sync::Arc;
use std::thread;

use bf_02_membership_filter::{BloomFilter, FilterConfig, SharedBloomFilter};
use bf_benchmarks::utils::{build_bitmap, document_names, random_values};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};

fn query_by_hash_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("bf-02/query/hash_count");
    let members = random_values(1000, 32, 11);
    let outsiders = random_values(1000, 32, 12);

    for hash_count in [1u32, 7, 13, 32] {
        let bitmap = build_bitmap(&members, 2048, hash_count);
        let filter = BloomFilter::new(&bitmap, 0, hash_count).expect("valid bench filter");

        group.bench_with_input(BenchmarkId::new("member", hash_count), &filter, |b, filter| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % members.len();
                filter.might_contain(black_box(&members[i]))
            })
        });

        group.bench_with_input(BenchmarkId::new("outsider", hash_count), &filter, |b, filter| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % outsiders.len();
                filter.might_contain(black_box(&outsiders[i]))
            })
        });
    }

    group.finish();
}

fn golden_scale_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("bf-02/query/replay");
    let names = document_names(10_000);
    let bitmap = build_bitmap(&names[..5_000], 11_983, 13);
    let filter = BloomFilter::new(&bitmap, 0, 13).expect("valid bench filter");

    group.throughput(Throughput::Elements(names.len() as u64));
    group.bench_function("10000_documents", |b| {
        b.iter(|| names.iter().filter(|n| filter.might_contain(n)).count())
    });

    group.finish();
}

fn initialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("bf-02/initialize");

    for bytes in [16usize, 1024, 65_536, 1 << 20] {
        let bitmap = vec![0xa5u8; bytes];
        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::new("reinitialize", bytes), &bitmap, |b, bitmap| {
            let mut filter = BloomFilter::empty();
            b.iter(|| filter.initialize(black_box(bitmap), 3, 7))
        });
    }

    group.finish();
}

fn shared_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("bf-02/shared");
    let names = Arc::new(document_names(1000));
    let bitmap = build_bitmap(&names, 1024, 7);

    let shared = SharedBloomFilter::new(FilterConfig::default());
    shared.initialize(&bitmap, 0, 7).expect("valid bench filter");

    for readers in [1usize, 4] {
        group.throughput(Throughput::Elements((readers * names.len()) as u64));
        group.bench_with_input(BenchmarkId::new("readers", readers), &readers, |b, &readers| {
            b.iter(|| {
                let handles: Vec<_> = (0..readers)
                    .map(|_| {
                        let shared = shared.clone();
                        let names = Arc::clone(&names);
                        thread::spawn(move || names.iter().filter(|n| shared.might_contain(n)).count())
                    })
                    .collect();
                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or(0))
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    query_by_hash_count(c);
    golden_scale_replay(c);
    initialization(c);
    shared_reads(c);
}
