//! Benchmarks for check hot paths and error construction.
//!
//! Every check is a single predicate evaluation, so the interesting costs
//! are the failure path (error construction, message formatting) and the
//! type-set scan.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use onecondition::prelude::*;

// ============================================================================
// SIGN CHECKS
// ============================================================================

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign");

    group.bench_function("positive_valid", |b| {
        b.iter(|| positive(black_box(&4_i64)))
    });

    group.bench_function("positive_invalid", |b| {
        b.iter(|| positive(black_box(&0_i64)))
    });

    group.finish();
}

// ============================================================================
// RANGE CHECKS
// ============================================================================

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");

    group.bench_function("in_range_valid", |b| {
        b.iter(|| in_range(black_box(&5_i64), &1, &10))
    });

    group.bench_function("in_range_below", |b| {
        b.iter(|| in_range(black_box(&0_i64), &1, &10))
    });

    group.bench_function("in_range_above", |b| {
        b.iter(|| in_range(black_box(&11_i64), &1, &10))
    });

    group.finish();
}

// ============================================================================
// TYPE CHECKS
// ============================================================================

fn bench_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("types");
    let numeric = type_set![i64, f64];

    group.bench_function("instance_hit", |b| {
        b.iter(|| instance(black_box(&4_i64), &numeric))
    });

    group.bench_function("instance_miss", |b| {
        b.iter(|| instance(black_box("foobar"), &numeric))
    });

    group.bench_function("type_set_construction", |b| {
        b.iter(|| type_set![i64, f64, String])
    });

    group.finish();
}

// ============================================================================
// STRING CHECKS
// ============================================================================

fn bench_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("string");

    group.bench_function("not_empty_valid", |b| {
        b.iter(|| not_empty(black_box("hello")))
    });

    group.bench_function("alphanumeric_valid", |b| {
        b.iter(|| alphanumeric(black_box("hello123")))
    });

    group.bench_function("alphanumeric_invalid_late", |b| {
        let input = "a".repeat(100) + "!";
        b.iter(|| alphanumeric(black_box(&input)))
    });

    #[cfg(feature = "pattern")]
    {
        let re = regex::Regex::new("^[a-z]+$").unwrap();
        group.bench_function("matches_valid", |b| {
            b.iter(|| matches(black_box("hello"), &re))
        });
    }

    group.finish();
}

// ============================================================================
// ERROR CONSTRUCTION
// ============================================================================

fn bench_error(c: &mut Criterion) {
    let mut group = c.benchmark_group("error");

    group.bench_function("construct_static_condition", |b| {
        b.iter(|| ValidationError::new(black_box(&0_i64), "be positive (non-zero)"))
    });

    group.bench_function("construct_dynamic_condition", |b| {
        b.iter(|| ValidationError::new(black_box(&3_i64), format!("be equal to `{}`", 4)))
    });

    group.bench_function("render_message", |b| {
        let err = ValidationError::new(&0_i64, "be positive (non-zero)");
        b.iter(|| black_box(&err).to_string())
    });

    group.finish();
}

// ============================================================================
// BENCHMARK GROUPS
// ============================================================================

criterion_group!(
    benches,
    bench_sign,
    bench_range,
    bench_types,
    bench_string,
    bench_error
);

criterion_main!(benches);
