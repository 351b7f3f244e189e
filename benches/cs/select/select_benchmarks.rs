use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use orderstat::select::{
    deterministic_select_with_scratch, randomized_select, select_partition, Counters,
    MedianScratch, PartitionScheme, SelectConfig, Selection,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_input(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen()).collect()
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select/median");
    for &size in &SIZES {
        let base = random_input(size, size as u64);
        let k = size / 2 + 1;

        group.bench_with_input(BenchmarkId::new("randomized", size), &base, |b, base| {
            let mut rng = StdRng::seed_from_u64(1);
            let mut counters = Counters::new();
            b.iter_batched_ref(
                || base.clone(),
                |arr| {
                    counters.reset();
                    black_box(randomized_select(arr, 0, size - 1, k, &mut rng, &mut counters))
                },
                BatchSize::LargeInput,
            );
        });

        for group_size in [3, 5, 7, 9] {
            let config = SelectConfig { group_size };
            group.bench_with_input(
                BenchmarkId::new(format!("median_of_medians_g{group_size}"), size),
                &base,
                |b, base| {
                    let mut scratch = MedianScratch::new();
                    let mut counters = Counters::new();
                    b.iter_batched_ref(
                        || base.clone(),
                        |arr| {
                            counters.reset();
                            black_box(deterministic_select_with_scratch(
                                arr,
                                0,
                                size - 1,
                                k,
                                config,
                                &mut scratch,
                                &mut counters,
                            ))
                        },
                        BatchSize::LargeInput,
                    );
                },
            );
        }
    }
    group.finish();
}

fn bench_select_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("select/partition");
    for &size in &SIZES {
        let base = random_input(size, !(size as u64));
        for scheme in [PartitionScheme::Lomuto, PartitionScheme::DualPivot] {
            for (label, selection) in [
                ("randomized", Selection::Randomized),
                ("median_of_medians", Selection::default()),
            ] {
                group.bench_with_input(
                    BenchmarkId::new(format!("{scheme:?}/{label}"), size),
                    &base,
                    |b, base| {
                        let mut rng = StdRng::seed_from_u64(2);
                        let mut counters = Counters::new();
                        b.iter_batched_ref(
                            || base.clone(),
                            |arr| {
                                black_box(select_partition(
                                    arr,
                                    0,
                                    size - 1,
                                    scheme,
                                    selection,
                                    &mut rng,
                                    &mut counters,
                                ))
                            },
                            BatchSize::LargeInput,
                        );
                    },
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_select, bench_select_partition);
criterion_main!(benches);
