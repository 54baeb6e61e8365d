//! # MS-01 Probabilistic Set Brutal Benchmarks
//!
//! Claims to validate:
//! - `add`: O(k) work (normalization + two hashes + k bit writes)
//! - `contains`: O(k) worst case, early exit on the first unset bit
//! - Reference workload: 10,000 domains into 1,000,000 bits with k=5
//!
//! Brutal Conditions:
//! - Large k values
//! - Mixed-case, padded inputs that must be normalized
//! - Shared-prefix domains (clustered polynomial hashes)

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use ms_01_probabilistic_set::domain::hash_functions::{fnv_style_hash, polynomial_hash};
use ms_01_probabilistic_set::{IndexMode, ProbabilisticSet};
use ms_benchmarks::utils::{generate_domains, generate_shared_prefix_domains};
use std::time::Duration;

const REFERENCE_BITS: i64 = 1_000_000;
const REFERENCE_HASHES: i64 = 5;

fn loaded_set(domains: &[String], mode: IndexMode) -> ProbabilisticSet {
    let mut set = ProbabilisticSet::with_mode(REFERENCE_BITS, REFERENCE_HASHES, mode)
        .expect("reference parameters are valid");
    for domain in domains {
        set.add(domain.as_str());
    }
    set
}

pub fn brutal_hash_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("ms-01/brutal/hash");

    let domain = "Suspicious-Login-Verification.Example.COM";
    group.bench_function("polynomial_hash", |b| {
        b.iter(|| polynomial_hash(black_box(domain)))
    });
    group.bench_function("fnv_style_hash", |b| {
        b.iter(|| fnv_style_hash(black_box(domain)))
    });

    group.finish();
}

pub fn brutal_add_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("ms-01/brutal/add");
    group.measurement_time(Duration::from_secs(10));

    for k in [1i64, 5, 13, 32] {
        group.bench_with_input(BenchmarkId::new("single_add", k), &k, |b, &k| {
            let mut set = ProbabilisticSet::new(REFERENCE_BITS, k).expect("valid parameters");
            b.iter(|| set.add(black_box("  Phish.Example.COM ")));
        });
    }

    let domains = generate_domains(10_000, 1);
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("reference_load_10000", |b| {
        b.iter(|| black_box(loaded_set(&domains, IndexMode::Compatible).bits_set()))
    });

    let clustered = generate_shared_prefix_domains(10_000);
    group.bench_function("shared_prefix_load_10000", |b| {
        b.iter(|| black_box(loaded_set(&clustered, IndexMode::Compatible).bits_set()))
    });

    group.finish();
}

pub fn brutal_contains_operations(c: &mut Criterion) {
    let inserted = generate_domains(10_000, 2);
    let queries = generate_domains(10_000, 3);
    let sets: Vec<(IndexMode, ProbabilisticSet)> = [IndexMode::Compatible, IndexMode::Unsigned]
        .into_iter()
        .map(|mode| (mode, loaded_set(&inserted, mode)))
        .collect();

    let mut group = c.benchmark_group("ms-01/brutal/contains");
    for (mode, set) in &sets {
        group.bench_with_input(BenchmarkId::new("contains_present", mode), set, |b, set| {
            b.iter(|| black_box(set.contains(black_box(inserted[5_000].as_str()))))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("ms-01/brutal/bulk_contains");
    group.measurement_time(Duration::from_secs(10));
    group.throughput(Throughput::Elements(queries.len() as u64));
    for (mode, set) in &sets {
        group.bench_with_input(BenchmarkId::new("queries_10000", mode), set, |b, set| {
            b.iter(|| {
                queries
                    .iter()
                    .filter(|q| set.contains(q.as_str()))
                    .count()
            })
        });
    }
    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    brutal_hash_functions(c);
    brutal_add_operations(c);
    brutal_contains_operations(c);
}
