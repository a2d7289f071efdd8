//! Criterion benchmarks for the matchpool scheduler.
//!
//! Measures admission throughput, single-pairing latency, and full
//! admit-then-drain cycles at several pool sizes.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench matching
//! ```

use std::time::Duration;

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use matchpool::Scheduler;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Generate deterministic (identity, seed) admissions.
fn generate_admissions(count: usize, rng_seed: u64) -> Vec<(u64, u64)> {
    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
    (0..count)
        .map(|i| (i as u64 + 1, rng.gen_range(0..=1_000_000u64)))
        .collect()
}

/// Build a scheduler pre-populated with `count` waiting participants.
fn populated_scheduler(count: usize, rng_seed: u64) -> Scheduler {
    let mut scheduler = Scheduler::with_capacity(count);
    for (id, seed) in generate_admissions(count, rng_seed) {
        scheduler.admit(id, seed).expect("unique ids");
    }
    scheduler
}

// ============================================================================
// BENCHMARK: Admission
// ============================================================================
// Measure admit performance on empty and populated pools

fn bench_admission(c: &mut Criterion) {
    let mut group = c.benchmark_group("admission");

    group.measurement_time(Duration::from_secs(5));

    // Benchmark: Admit into an empty pool
    group.bench_function("admit_to_empty", |b| {
        b.iter_batched(
            Scheduler::new,
            |mut scheduler| black_box(scheduler.admit(1, 500)),
            BatchSize::SmallInput,
        );
    });

    // Benchmark: Admit into a pool with 10k waiting participants
    group.bench_function("admit_to_10k_pool", |b| {
        b.iter_batched(
            || populated_scheduler(10_000, 42),
            |mut scheduler| black_box(scheduler.admit(999_999, 500)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Pairing
// ============================================================================
// Measure next_pairing latency at different pool depths

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairing");

    group.measurement_time(Duration::from_secs(5));

    for pool_size in [100, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("single_pairing", pool_size),
            &pool_size,
            |b, &size| {
                b.iter_batched(
                    || populated_scheduler(size, 42),
                    |mut scheduler| black_box(scheduler.next_pairing()),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================
// Full admit-then-drain cycles; elements = admissions processed

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for batch_size in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(
            BenchmarkId::new("admit_and_drain", batch_size),
            &batch_size,
            |b, &size| {
                // Generate admissions deterministically (same seed = same run)
                let admissions = generate_admissions(size, 42);

                b.iter_batched(
                    || admissions.clone(),
                    |admissions| {
                        let mut scheduler = Scheduler::with_capacity(admissions.len());
                        for (id, seed) in admissions {
                            scheduler.admit(id, seed).expect("unique ids");
                        }
                        let mut pairings = 0;
                        while scheduler.next_pairing().is_some() {
                            pairings += 1;
                        }
                        black_box(pairings)
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Ledger Root
// ============================================================================
// Digest cost over a fully drained ledger

fn bench_ledger_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger_root");

    group.measurement_time(Duration::from_secs(5));

    group.bench_function("root_of_5k_pairings", |b| {
        let mut scheduler = populated_scheduler(10_000, 42);
        while scheduler.next_pairing().is_some() {}

        b.iter(|| black_box(scheduler.ledger().compute_root()));
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_admission,
    bench_pairing,
    bench_throughput,
    bench_ledger_root
);

criterion_main!(benches);
