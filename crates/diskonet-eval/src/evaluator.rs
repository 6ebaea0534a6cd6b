//! Broadcast parameters over a quantity's sample points, predict, and
//! reshape back onto the mesh.
//!
//! The sample grid is flattened row-major (radial index outermost) and
//! predictor output is reshaped with the same order, so value `k` of a
//! vector's output lands at `(k / n_theta, k % n_theta)`.

use crate::batch::ParameterBatch;
use crate::config::EvalConfig;
use crate::field::PredictionField;
use crate::metrics::EvalMetrics;
use crate::predictor::{BatchCapability, PredictInput, Predictor};
use diskonet_core::{EvalError, QuantityLayout};
use diskonet_grid::{SampleGrid, StaggeredGrid};
use indexmap::IndexMap;
use ndarray::{Array2, Array3, ArrayView1};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, trace};

/// Evaluates a [`Predictor`] on the staggered sample points of a grid.
///
/// The evaluator holds no cached predictions; the grid's derived
/// coordinates are the only reused state, and they are borrowed
/// read-only for each call.
///
/// # Examples
///
/// ```
/// use diskonet_core::QuantityLayout;
/// use diskonet_eval::{FieldEvaluator, FnPredictor, ParameterBatch, PredictInput};
/// use diskonet_grid::StaggeredGrid;
///
/// let grid = StaggeredGrid::new(1.0, 2.0, -1.0, 1.0, 4, 8).unwrap();
/// // Radius scaled by the first parameter.
/// let model = FnPredictor::new("scaled_radius", |input: &PredictInput<'_>| {
///     let (u, y) = (input.u_net(), input.y_net());
///     (0..input.rows()).map(|k| u[[k, 0]] * y[[k, 0]]).collect()
/// });
/// let evaluator = FieldEvaluator::new(model);
/// let batch = ParameterBatch::from_rows([[1.0], [10.0]]).unwrap();
///
/// let field = evaluator.evaluate(&grid, QuantityLayout::RadialVelocity, &batch).unwrap();
/// assert_eq!(field.values().dim(), (2, 4, 8));
/// assert_eq!(field.get(1).unwrap()[[1, 0]], 12.5);
/// ```
pub struct FieldEvaluator<P> {
    predictor: P,
    config: EvalConfig,
}

impl<P: Predictor> FieldEvaluator<P> {
    /// An evaluator with the default [`EvalConfig`].
    pub fn new(predictor: P) -> Self {
        Self::with_config(predictor, EvalConfig::default())
    }

    /// An evaluator with an explicit configuration.
    pub fn with_config(predictor: P, config: EvalConfig) -> Self {
        Self { predictor, config }
    }

    /// The wrapped predictor.
    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    /// The active configuration.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate `layout` for every vector in `params`.
    ///
    /// # Errors
    ///
    /// - [`EvalError::EmptyBatch`] if `params` has no rows
    /// - [`EvalError::ParameterWidth`] if the predictor declares a width
    ///   the batch does not match
    /// - [`EvalError::ShapeMismatch`] if the predictor returns the wrong
    ///   number of values for any call
    /// - [`EvalError::NonFinite`] if enabled and any value is NaN or
    ///   infinite
    ///
    /// With [`EvalConfig::parallel`] set and several failing vectors, which
    /// vector's error is reported is unspecified.
    pub fn evaluate(
        &self,
        grid: &StaggeredGrid,
        layout: QuantityLayout,
        params: &ParameterBatch,
    ) -> Result<PredictionField, EvalError> {
        self.evaluate_with_metrics(grid, layout, params)
            .map(|(field, _)| field)
    }

    /// [`evaluate`](Self::evaluate), also returning timing metrics.
    pub fn evaluate_with_metrics(
        &self,
        grid: &StaggeredGrid,
        layout: QuantityLayout,
        params: &ParameterBatch,
    ) -> Result<(PredictionField, EvalMetrics), EvalError> {
        let start = Instant::now();
        self.check_batch(params)?;

        let sample = grid.sample_grid(layout);
        let (n_r, n_theta) = sample.shape();
        let points = sample.len();
        let batch = params.len();
        let stacked = self.config.respect_capability
            && self.predictor.capability() == BatchCapability::Vectorized
            && batch > 1;
        debug!(
            predictor = self.predictor.name(),
            %layout,
            batch,
            points,
            stacked,
            parallel = self.config.parallel,
            "evaluating field"
        );

        let predict_start = Instant::now();
        let (flat, predict_calls) = if stacked {
            (self.predict_stacked(sample, params)?, 1)
        } else {
            (self.predict_per_vector(sample, params)?, batch)
        };
        let predict_us = predict_start.elapsed().as_micros() as u64;

        if self.config.reject_non_finite {
            check_finite(&flat, points)?;
        }
        let values = unflatten(flat, batch, n_r, n_theta)?;

        let metrics = EvalMetrics {
            total_us: start.elapsed().as_micros() as u64,
            predict_us,
            predict_calls,
            batch,
            points,
        };
        debug!(%layout, total_us = metrics.total_us, predict_us, "field evaluated");
        Ok((PredictionField::new(layout, values), metrics))
    }

    /// Evaluate several layouts against the same batch.
    ///
    /// Results keep the order of `layouts`; repeated layouts are
    /// evaluated once. The first failure aborts the whole request.
    pub fn evaluate_many(
        &self,
        grid: &StaggeredGrid,
        layouts: &[QuantityLayout],
        params: &ParameterBatch,
    ) -> Result<IndexMap<QuantityLayout, PredictionField>, EvalError> {
        let mut fields = IndexMap::with_capacity(layouts.len());
        for &layout in layouts {
            if fields.contains_key(&layout) {
                continue;
            }
            let field = self.evaluate(grid, layout, params)?;
            fields.insert(layout, field);
        }
        Ok(fields)
    }

    /// Evaluate all three quantities, in [`QuantityLayout::ALL`] order.
    pub fn evaluate_all(
        &self,
        grid: &StaggeredGrid,
        params: &ParameterBatch,
    ) -> Result<IndexMap<QuantityLayout, PredictionField>, EvalError> {
        self.evaluate_many(grid, &QuantityLayout::ALL, params)
    }

    fn check_batch(&self, params: &ParameterBatch) -> Result<(), EvalError> {
        if params.is_empty() {
            return Err(EvalError::EmptyBatch);
        }
        if let Some(expected) = self.predictor.n_params() {
            if params.n_params() != expected {
                return Err(EvalError::ParameterWidth {
                    expected,
                    actual: params.n_params(),
                });
            }
        }
        Ok(())
    }

    /// One call per vector, each vector tiled over every sample point.
    fn predict_per_vector(
        &self,
        sample: &SampleGrid,
        params: &ParameterBatch,
    ) -> Result<Vec<f64>, EvalError> {
        let points = sample.points();
        let n = sample.len();
        let run = |b: usize| -> Result<Vec<f64>, EvalError> {
            let u_net = tile(params.row(b), n);
            let out = self
                .predictor
                .predict(&PredictInput::new(u_net.view(), points.view()));
            if out.len() != n {
                return Err(EvalError::ShapeMismatch {
                    parameter_index: Some(b),
                    expected: n,
                    actual: out.len(),
                });
            }
            trace!(parameter_index = b, "predicted vector");
            Ok(out)
        };

        // Results are collected by index, so completion order is irrelevant.
        let outputs: Vec<Vec<f64>> = if self.config.parallel {
            (0..params.len())
                .into_par_iter()
                .map(run)
                .collect::<Result<_, _>>()?
        } else {
            (0..params.len()).map(run).collect::<Result<_, _>>()?
        };
        Ok(outputs.concat())
    }

    /// One call for the whole batch, rows stacked batch-major.
    fn predict_stacked(
        &self,
        sample: &SampleGrid,
        params: &ParameterBatch,
    ) -> Result<Vec<f64>, EvalError> {
        let n = sample.len();
        let rows = params.len() * n;
        let values = params.values();
        let points = sample.points();
        let u_net = Array2::from_shape_fn((rows, params.n_params()), |(k, c)| values[[k / n, c]]);
        let y_net = Array2::from_shape_fn((rows, 2), |(k, c)| points[[k % n, c]]);
        let out = self
            .predictor
            .predict(&PredictInput::new(u_net.view(), y_net.view()));
        if out.len() != rows {
            return Err(EvalError::ShapeMismatch {
                parameter_index: None,
                expected: rows,
                actual: out.len(),
            });
        }
        trace!(rows, "predicted stacked batch");
        Ok(out)
    }
}

/// Evaluate `layout` on `grid` for every vector in `params` with the
/// default configuration.
pub fn evaluate<P: Predictor>(
    grid: &StaggeredGrid,
    layout: QuantityLayout,
    params: &ParameterBatch,
    predictor: &P,
) -> Result<PredictionField, EvalError> {
    FieldEvaluator::new(predictor).evaluate(grid, layout, params)
}

/// Repeat one parameter row `n` times.
fn tile(row: ArrayView1<'_, f64>, n: usize) -> Array2<f64> {
    Array2::from_shape_fn((n, row.len()), |(_, c)| row[c])
}

fn check_finite(flat: &[f64], points: usize) -> Result<(), EvalError> {
    match flat.iter().position(|v| !v.is_finite()) {
        Some(k) => Err(EvalError::NonFinite {
            parameter_index: k / points,
            point_index: k % points,
        }),
        None => Ok(()),
    }
}

/// Inverse of the row-major flattening: `(batch * n_r * n_theta,)` to
/// `(batch, n_r, n_theta)`.
fn unflatten(
    flat: Vec<f64>,
    batch: usize,
    n_r: usize,
    n_theta: usize,
) -> Result<Array3<f64>, EvalError> {
    let actual = flat.len();
    Array3::from_shape_vec((batch, n_r, n_theta), flat).map_err(|_| EvalError::ShapeMismatch {
        parameter_index: None,
        expected: batch * n_r * n_theta,
        actual,
    })
}
