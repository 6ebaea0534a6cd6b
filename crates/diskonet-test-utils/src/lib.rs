//! Test utilities and stub predictors for diskonet development.
//!
//! Provides deterministic [`Predictor`](diskonet_eval::Predictor)
//! implementations in [`fixtures`] and ready-made grids for tests and
//! benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    AnalyticDiskPredictor, ArangePredictor, CountingPredictor, NanPredictor,
    TaggingPredictor, WrongLengthPredictor,
};

use diskonet_eval::{ParameterBatch, ParameterSpace};
use diskonet_grid::{DiskSetup, StaggeredGrid};
use std::f64::consts::PI;

/// `[1, 2] x [-π, π]` with the given resolution.
///
/// Panics on a zero cell count; test code only.
pub fn unit_annulus(n_r: usize, n_theta: usize) -> StaggeredGrid {
    StaggeredGrid::new(1.0, 2.0, -PI, PI, n_r, n_theta).expect("valid test domain")
}

/// The setup block of a typical planet-disk run: radius 0.4 to 2.5,
/// full azimuth.
pub fn reference_setup(n_r: i64, n_theta: i64) -> DiskSetup {
    DiskSetup {
        ymin: 0.4,
        ymax: 2.5,
        xmin: -PI,
        xmax: PI,
        ny: n_r,
        nx: n_theta,
    }
}

/// A grid built from [`reference_setup`].
pub fn reference_grid(n_r: usize, n_theta: usize) -> StaggeredGrid {
    let setup = reference_setup(n_r as i64, n_theta as i64);
    StaggeredGrid::from_domain(setup.domain().expect("valid reference setup"))
}

/// `n` rows `[b, 0.05, 1e-3]` for `b = 0..n`: the first column is the
/// row index so outputs can be traced back to their row.
pub fn indexed_batch(n: usize) -> ParameterBatch {
    ParameterBatch::from_rows((0..n).map(|b| [b as f64, 0.05, 1e-3])).expect("uniform rows")
}

/// `n` physical vectors spread evenly from the low corner to the high
/// corner of the default disk parameter space.
pub fn ppd_batch(n: usize) -> ParameterBatch {
    let space = ParameterSpace::ppd_default();
    let marks: Vec<Vec<f64>> = space.axes().map(|axis| axis.marks(n)).collect();
    let rows = (0..n).map(|b| marks.iter().map(|m| m[b]).collect::<Vec<f64>>());
    space.batch_from_controls(rows).expect("controls within axes")
}
