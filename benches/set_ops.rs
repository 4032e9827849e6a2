//! Wall-clock comparison of the two flat set variants against the standard
//! `BTreeSet` on `insert` and `find` at increasing sizes.
//!
//! Keys are drawn from a seeded generator so runs are reproducible.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flat_structures::{LinearSet, SortedSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Random keys over a domain twice the requested count, so roughly half of
/// the lookups miss.
fn random_keys(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..2 * count as u64)).collect()
}

fn bench_insert_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");

    for size in SIZES {
        let keys = random_keys(size, 1);

        group.bench_with_input(BenchmarkId::new("LinearSet", size), &keys, |b, keys| {
            b.iter(|| {
                let mut set = LinearSet::new();
                for &key in keys {
                    black_box(set.insert(key));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("SortedSet", size), &keys, |b, keys| {
            b.iter(|| {
                let mut set = SortedSet::new();
                for &key in keys {
                    black_box(set.insert(key));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &keys, |b, keys| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &key in keys {
                    black_box(set.insert(key));
                }
            });
        });
    }

    group.finish();
}

fn bench_find_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_random");

    for size in SIZES {
        let keys = random_keys(size, 2);
        let probes = random_keys(size, 3);

        let linear: LinearSet<u64> = keys.iter().copied().collect();
        let sorted: SortedSet<u64> = keys.iter().copied().collect();
        let btree: BTreeSet<u64> = keys.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("LinearSet", size), &probes, |b, probes| {
            b.iter(|| {
                for key in probes {
                    black_box(linear.find(key));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("SortedSet", size), &probes, |b, probes| {
            b.iter(|| {
                for key in probes {
                    black_box(sorted.find(key));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &probes, |b, probes| {
            b.iter(|| {
                for key in probes {
                    black_box(btree.contains(key));
                }
            });
        });
    }

    group.finish();
}

/// Ascending input is the clustered workload the hint protocol targets: with
/// `hint = len()` every hint is confirmed and the binary search is skipped.
fn bench_insert_ascending(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ascending");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("SortedSet", size), &size, |b, &size| {
            b.iter(|| {
                let mut set = SortedSet::new();
                for key in 0..size as u64 {
                    black_box(set.insert(key));
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("SortedSet_hint", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut set = SortedSet::new();
                    for key in 0..size as u64 {
                        black_box(set.insert_hint(set.len(), key));
                    }
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |b, &size| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for key in 0..size as u64 {
                    black_box(set.insert(key));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random,
    bench_find_random,
    bench_insert_ascending
);
criterion_main!(benches);
