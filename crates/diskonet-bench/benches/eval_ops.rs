//! Criterion benchmarks for field evaluation on the reference profile.

use criterion::{criterion_group, criterion_main, Criterion};
use diskonet_bench::reference_profile;
use diskonet_core::QuantityLayout;
use diskonet_eval::{EvalConfig, FieldEvaluator};
use diskonet_test_utils::AnalyticDiskPredictor;
use std::hint::black_box;

/// Benchmark: one call per vector, sequential.
fn bench_per_vector_sequential(c: &mut Criterion) {
    let profile = reference_profile(42);
    let evaluator = FieldEvaluator::new(AnalyticDiskPredictor::per_vector());

    c.bench_function("eval_per_vector_sequential", |b| {
        b.iter(|| {
            let field = evaluator
                .evaluate(&profile.grid, QuantityLayout::Scalar, &profile.params)
                .unwrap();
            black_box(field);
        });
    });
}

/// Benchmark: one call per vector on the rayon pool.
fn bench_per_vector_parallel(c: &mut Criterion) {
    let profile = reference_profile(42);
    let evaluator = FieldEvaluator::with_config(
        AnalyticDiskPredictor::per_vector(),
        EvalConfig {
            parallel: true,
            ..EvalConfig::default()
        },
    );

    c.bench_function("eval_per_vector_parallel", |b| {
        b.iter(|| {
            let field = evaluator
                .evaluate(&profile.grid, QuantityLayout::Scalar, &profile.params)
                .unwrap();
            black_box(field);
        });
    });
}

/// Benchmark: a single stacked call for the whole batch.
fn bench_vectorized(c: &mut Criterion) {
    let profile = reference_profile(42);
    let evaluator = FieldEvaluator::new(AnalyticDiskPredictor::new());

    c.bench_function("eval_vectorized", |b| {
        b.iter(|| {
            let field = evaluator
                .evaluate(&profile.grid, QuantityLayout::Scalar, &profile.params)
                .unwrap();
            black_box(field);
        });
    });
}

/// Benchmark: all three layouts through `evaluate_all`.
fn bench_all_layouts(c: &mut Criterion) {
    let profile = reference_profile(7);
    let evaluator = FieldEvaluator::new(AnalyticDiskPredictor::new());

    c.bench_function("eval_all_layouts", |b| {
        b.iter(|| {
            let fields = evaluator.evaluate_all(&profile.grid, &profile.params).unwrap();
            black_box(fields);
        });
    });
}

criterion_group!(
    benches,
    bench_per_vector_sequential,
    bench_per_vector_parallel,
    bench_vectorized,
    bench_all_layouts
);
criterion_main!(benches);
