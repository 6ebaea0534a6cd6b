//! Field evaluation for diskonet.
//!
//! Turns a trained operator network's point-wise forward pass into full
//! 2-D fields on a [`StaggeredGrid`](diskonet_grid::StaggeredGrid):
//! parameter vectors are broadcast across a quantity's sample points,
//! the [`Predictor`] is called, and the flat output is reshaped back onto
//! the `(n_r, n_theta)` mesh.
//!
//! # Architecture
//!
//! - [`Predictor`]: the opaque model seam, with [`FnPredictor`] for closures
//! - [`ParameterBatch`]: ordered physical parameter vectors
//! - [`ParameterSpace`]: named control axes mapped to physical values
//! - [`FieldEvaluator`]: broadcast, predict, and reshape
//! - [`PredictionField`]: the `(batch, n_r, n_theta)` result
//! - [`FieldRange`] and [`labels`]: helpers for rendering results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod evaluator;
pub mod field;
pub mod labels;
pub mod metrics;
pub mod predictor;
pub mod space;
pub mod summary;

pub use batch::ParameterBatch;
pub use config::EvalConfig;
pub use evaluator::{evaluate, FieldEvaluator};
pub use field::PredictionField;
pub use metrics::EvalMetrics;
pub use predictor::{BatchCapability, FnPredictor, PredictInput, Predictor};
pub use space::{ParameterAxis, ParameterScale, ParameterSpace};
pub use summary::{FieldRange, MAX_DECADE_TICKS};
