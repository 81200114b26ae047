//! Benchmarks for validating a pool and shuffling the remaining letters.
//!
//! # Benchmarks
//!
//! - **`validate_pool`**: Validates a full 15-letter pool against a set of locks.
//! - **`validate_and_shuffle`**: Validation followed by a seeded shuffle of the
//!   remaining letters, the work done on every pool edit.
//!
//! # Test Data
//!
//! Uses fixed pools and a fixed seed so runs are reproducible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench shuffle
//! ```

use std::{hint, time::Duration};

use anagram_core::{Letter, LetterPool, LockMap, validate_pool};
use anagram_shuffle::{ShuffleSeed, Shuffler};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const POOLS: [&str; 3] = ["RRETOPUCM", "ANAGRAMHELPERXY", "QUIZ"];

fn locks_for(pool: &LetterPool) -> LockMap {
    pool.letters()
        .iter()
        .step_by(3)
        .enumerate()
        .map(|(i, &letter)| (i * 2, letter))
        .collect()
}

fn bench_validate(c: &mut Criterion) {
    for pool in POOLS {
        let pool = LetterPool::sanitize(pool);
        let locks = locks_for(&pool);
        c.bench_with_input(
            BenchmarkId::new("validate_pool", pool.to_string()),
            &(pool, locks),
            |b, (pool, locks)| b.iter(|| validate_pool(hint::black_box(pool), locks)),
        );
    }
}

fn bench_validate_and_shuffle(c: &mut Criterion) {
    let seed = ShuffleSeed::from_bytes([0x5e; 32]);
    for pool in POOLS {
        let pool = LetterPool::sanitize(pool);
        let locks = locks_for(&pool);
        c.bench_with_input(
            BenchmarkId::new("validate_and_shuffle", pool.to_string()),
            &(pool, locks),
            |b, (pool, locks)| {
                b.iter_batched(
                    || Shuffler::with_seed(seed),
                    |mut shuffler| {
                        validate_pool(hint::black_box(pool), locks)
                            .map(|remaining| shuffler.shuffle::<Letter>(&remaining))
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(5));
    targets =
        bench_validate,
        bench_validate_and_shuffle
);
criterion_main!(benches);
