//! Criterion micro-benchmarks for staggered grid derivation.

use criterion::{criterion_group, criterion_main, Criterion};
use diskonet_core::QuantityLayout;
use diskonet_grid::{DomainSpec, StaggeredGrid};
use std::hint::black_box;

/// Benchmark: derive all three sample grids on a fresh 128x384 grid.
fn bench_sample_grids_cold(c: &mut Criterion) {
    let domain = DomainSpec::full_azimuth(0.4, 2.5, 128, 384).unwrap();

    c.bench_function("sample_grids_cold_128x384", |b| {
        b.iter(|| {
            let grid = StaggeredGrid::from_domain(domain);
            for layout in QuantityLayout::ALL {
                black_box(grid.sample_grid(layout));
            }
        });
    });
}

/// Benchmark: memoized lookup once the sample grids exist.
fn bench_sample_grids_warm(c: &mut Criterion) {
    let grid = StaggeredGrid::from_domain(DomainSpec::full_azimuth(0.4, 2.5, 128, 384).unwrap());
    for layout in QuantityLayout::ALL {
        grid.sample_grid(layout);
    }

    c.bench_function("sample_grids_warm_128x384", |b| {
        b.iter(|| {
            for layout in QuantityLayout::ALL {
                black_box(grid.sample_grid(layout));
            }
        });
    });
}

/// Benchmark: axis derivation alone on a long radial axis.
fn bench_axes_1m(c: &mut Criterion) {
    let domain = DomainSpec::new(0.4, 2.5, 0.0, 1.0, 1_000_000, 1).unwrap();

    c.bench_function("radial_axes_1m", |b| {
        b.iter(|| {
            let grid = StaggeredGrid::from_domain(domain);
            black_box(grid.r_middle());
            black_box(grid.r_edge());
        });
    });
}

criterion_group!(
    benches,
    bench_sample_grids_cold,
    bench_sample_grids_warm,
    bench_axes_1m
);
criterion_main!(benches);
