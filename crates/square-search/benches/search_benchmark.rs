//! Benchmarks for the qualification predicate and small-range searches.
//!
//! Run with: cargo bench --package square-search

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use square_search::{
    enumerate_squares, is_semi_magic_square_of_squares, search_all, ParkerTriple, SearchConfig,
    Square, PARKER_SQUARE,
};

fn bench_predicate(c: &mut Criterion) {
    let rejected = Square::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);

    c.bench_function("predicate_parker", |b| {
        b.iter(|| is_semi_magic_square_of_squares(black_box(&PARKER_SQUARE)))
    });
    c.bench_function("predicate_rejected", |b| {
        b.iter(|| is_semi_magic_square_of_squares(black_box(&rejected)))
    });
}

fn bench_enumeration(c: &mut Criterion) {
    let triple = ParkerTriple::new(29, 1, 41).expect("Parker triple");

    c.bench_function("enumerate_parker_triple_48", |b| {
        b.iter(|| enumerate_squares(black_box(triple), 48))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_48");
    group.sample_size(10);

    let sequential = SearchConfig::new().with_val_max(48).with_parallel(false);
    let parallel = SearchConfig::new().with_val_max(48);

    group.bench_function("sequential", |b| b.iter(|| search_all(black_box(&sequential))));
    group.bench_function("parallel", |b| b.iter(|| search_all(black_box(&parallel))));
    group.finish();
}

criterion_group!(benches, bench_predicate, bench_enumeration, bench_search);
criterion_main!(benches);
