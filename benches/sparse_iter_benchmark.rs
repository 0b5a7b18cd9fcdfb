use std::cell::RefCell;

use criterion::{criterion_group, criterion_main, Criterion};
use sparse_iter::{sparse_array, sparse_long_array_with_replacement, ProtectedIterator};

pub fn sparse_iter_benchmark(c: &mut Criterion) {
    let entries: Vec<(i32, u64)> = (0..4096).map(|key| (key * 7, rand::random())).collect();
    let container = RefCell::new(entries);
    let mut group = c.benchmark_group("sparse-iter-benchmarks");
    group.throughput(criterion::Throughput::Elements(4096));
    group.bench_function("iterate_entries", |b| {
        b.iter(|| sparse_array(&container).map(|entry| *entry.value()).sum::<u64>())
    });

    let longs: Vec<(i32, i64)> = (0..4096).map(|key| (key, rand::random())).collect();
    let longs = RefCell::new(longs);
    group.bench_function("iterate_and_replace", |b| {
        b.iter(|| {
            let mut iter = sparse_long_array_with_replacement(&longs, 0);
            while iter.has_next() {
                iter.try_next().expect("Failed reading an entry");
                iter.remove().expect("Failed replacing an entry");
            }
        })
    });
    group.finish();
}

criterion_group!(benches, sparse_iter_benchmark);
criterion_main!(benches);
