use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use persistent_avl_set::AvlSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Reproducible random keys
fn random_keys(n: usize, max: u64, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..max)).collect()
}

/// Benchmark bulk construction: of_list vs repeated add vs BTreeSet
fn bench_build_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_random");

    for size in [1_000usize, 10_000, 100_000].iter() {
        let keys = random_keys(*size, 1 << 40, 1);

        group.bench_with_input(BenchmarkId::new("AvlSet_of_list", size), &keys, |b, keys| {
            b.iter(|| black_box(AvlSet::of_list(keys.clone())));
        });

        group.bench_with_input(BenchmarkId::new("AvlSet_add", size), &keys, |b, keys| {
            b.iter(|| {
                let mut set = AvlSet::new();
                for &key in keys {
                    set = set.add(key);
                }
                black_box(set)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &keys, |b, keys| {
            b.iter(|| black_box(keys.iter().copied().collect::<BTreeSet<u64>>()));
        });
    }

    group.finish();
}

/// Benchmark contains with random queries (roughly half hits)
fn bench_contains_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_random");

    let keys = random_keys(100_000, 200_000, 2);
    let queries = random_keys(1_000, 200_000, 3);
    let set = AvlSet::of_list(keys.clone());
    let btree: BTreeSet<u64> = keys.into_iter().collect();

    group.bench_function("AvlSet", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for q in &queries {
                hits += usize::from(set.contains(q));
            }
            black_box(hits)
        });
    });

    group.bench_function("BTreeSet", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for q in &queries {
                hits += usize::from(btree.contains(q));
            }
            black_box(hits)
        });
    });

    group.finish();
}

/// Benchmark union/inter/diff for balanced and skewed operand sizes
fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra");

    for (n1, n2) in [(10_000usize, 10_000usize), (100_000, 100), (100_000, 10_000)] {
        let a = random_keys(n1, 1 << 20, 4);
        let b = random_keys(n2, 1 << 20, 5);
        let (s1, s2) = (AvlSet::of_list(a.clone()), AvlSet::of_list(b.clone()));
        let (m1, m2): (BTreeSet<u64>, BTreeSet<u64>) =
            (a.into_iter().collect(), b.into_iter().collect());
        let label = format!("{n1}x{n2}");

        group.bench_function(BenchmarkId::new("AvlSet_union", &label), |bench| {
            bench.iter(|| black_box(s1.union(&s2)));
        });
        group.bench_function(BenchmarkId::new("BTreeSet_union", &label), |bench| {
            bench.iter(|| black_box(&m1 | &m2));
        });

        group.bench_function(BenchmarkId::new("AvlSet_inter", &label), |bench| {
            bench.iter(|| black_box(s1.inter(&s2)));
        });
        group.bench_function(BenchmarkId::new("BTreeSet_inter", &label), |bench| {
            bench.iter(|| black_box(&m1 & &m2));
        });

        group.bench_function(BenchmarkId::new("AvlSet_diff", &label), |bench| {
            bench.iter(|| black_box(s1.diff(&s2)));
        });
        group.bench_function(BenchmarkId::new("BTreeSet_diff", &label), |bench| {
            bench.iter(|| black_box(&m1 - &m2));
        });
    }

    group.finish();
}

/// Benchmark full iteration over all elements
fn bench_iter_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter_full");

    let set: AvlSet<u64> = (0..100_000).collect();
    let btree: BTreeSet<u64> = (0..100_000).collect();

    group.bench_function("AvlSet", |b| {
        b.iter(|| {
            let mut count = 0u64;
            for &key in set.iter() {
                count = count.wrapping_add(black_box(key));
            }
            black_box(count)
        });
    });

    group.bench_function("BTreeSet", |b| {
        b.iter(|| {
            let mut count = 0u64;
            for &key in btree.iter() {
                count = count.wrapping_add(black_box(key));
            }
            black_box(count)
        });
    });

    group.finish();
}

/// Benchmark range queries of different widths
fn bench_range_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_queries");

    let set: AvlSet<u64> = (0..100_000).collect();
    let btree: BTreeSet<u64> = (0..100_000).collect();

    for width in [10u64, 1_000, 50_000] {
        let start = 25_000u64;

        group.bench_with_input(BenchmarkId::new("AvlSet", width), &width, |b, &width| {
            b.iter(|| black_box(set.range(start..start + width).count()));
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", width), &width, |b, &width| {
            b.iter(|| black_box(btree.range(start..start + width).count()));
        });
    }

    group.finish();
}

/// Benchmark whole-set equality on equal sets of different shapes
fn bench_equal(c: &mut Criterion) {
    let mut group = c.benchmark_group("equal");

    let keys = random_keys(50_000, 1 << 32, 6);
    let mut by_add = AvlSet::new();
    for &k in &keys {
        by_add = by_add.add(k);
    }
    let by_list = AvlSet::of_list(keys.clone());
    let m1: BTreeSet<u64> = keys.iter().copied().collect();
    let m2 = m1.clone();

    group.bench_function("AvlSet", |b| b.iter(|| black_box(by_add.equal(&by_list))));
    group.bench_function("BTreeSet", |b| b.iter(|| black_box(m1 == m2)));

    group.finish();
}

criterion_group!(
    benches,
    bench_build_random,
    bench_contains_random,
    bench_algebra,
    bench_iter_full,
    bench_range_queries,
    bench_equal,
);
criterion_main!(benches);
