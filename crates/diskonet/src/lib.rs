//! diskonet: staggered polar grids and batched field evaluation for
//! neural-operator surrogates of protoplanetary disks.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the diskonet sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use diskonet::prelude::*;
//!
//! // Stand-in for a trained network: density falling off as 1/r.
//! let model = FnPredictor::new("one_over_r", |input: &PredictInput<'_>| {
//!     input.y_net().column(0).iter().map(|r| 1.0 / r).collect::<Vec<f64>>()
//! });
//!
//! let grid = StaggeredGrid::new(0.4, 2.5, -std::f64::consts::PI, std::f64::consts::PI, 32, 96)
//!     .unwrap();
//! let params = ParameterSpace::ppd_default()
//!     .batch_from_controls([[-3.0, 0.05, -3.0]])
//!     .unwrap();
//!
//! let sigma = FieldEvaluator::new(model)
//!     .evaluate(&grid, QuantityLayout::Scalar, &params)
//!     .unwrap();
//! assert_eq!(sigma.shape(), (32, 96));
//! let r0 = grid.r_middle()[0];
//! assert_eq!(sigma.single().unwrap()[[0, 5]], 1.0 / r0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `diskonet-core` | Layouts, parameter vectors, error types |
//! | [`grid`] | `diskonet-grid` | Domains, staggered grids, sample grids |
//! | [`eval`] | `diskonet-eval` | Predictors, batches, evaluation, summaries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary and errors (`diskonet-core`).
pub use diskonet_core as types;

/// Domain validation and staggered grid derivation (`diskonet-grid`).
///
/// [`grid::StaggeredGrid`] derives every coordinate array lazily and
/// caches it for the grid's lifetime.
pub use diskonet_grid as grid;

/// Field evaluation (`diskonet-eval`).
///
/// Implement [`eval::Predictor`] for a trained model and hand it to an
/// [`eval::FieldEvaluator`].
pub use diskonet_eval as eval;

/// Common imports for typical diskonet usage.
pub mod prelude {
    // Core
    pub use diskonet_core::{AxisPlacement, EvalError, GridError, ParameterVector, QuantityLayout};

    // Grid
    pub use diskonet_grid::{DiskSetup, DomainSpec, SampleGrid, StaggeredGrid};

    // Evaluation
    pub use diskonet_eval::{
        evaluate, BatchCapability, EvalConfig, EvalMetrics, FieldEvaluator, FieldRange,
        FnPredictor, ParameterBatch, ParameterSpace, PredictInput, PredictionField, Predictor,
    };
}
