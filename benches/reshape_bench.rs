//! Performance benchmarks for reshaping functions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use seqkit::{chunk, flatten, n_dimensional_zeros, shift, swap_head_and_tail};

fn random_vec(size: usize) -> Vec<u32> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    (0..size).map(|_| rng.gen()).collect()
}

fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift");

    for size in [100, 1000, 10000].iter() {
        let seq = random_vec(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| shift(black_box(&seq), black_box(size as isize / 3)));
        });
    }
    group.finish();
}

fn bench_swap_head_and_tail(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_head_and_tail");

    for size in [101, 1001, 10001].iter() {
        let seq = random_vec(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| swap_head_and_tail(black_box(&seq)));
        });
    }
    group.finish();
}

fn bench_chunk(c: &mut Criterion) {
    let seq = random_vec(10000);

    c.bench_function("chunk_10000_by_7", |b| {
        b.iter(|| chunk(black_box(&seq), black_box(7)));
    });
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for depth in [2, 4, 8].iter() {
        let nested = n_dimensional_zeros(*depth, 3).expect("valid dimensions");
        let list = nested.as_list().expect("zeros are a list").to_vec();

        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
            b.iter(|| flatten(black_box(&list)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_shift,
    bench_swap_head_and_tail,
    bench_chunk,
    bench_flatten
);

criterion_main!(benches);
