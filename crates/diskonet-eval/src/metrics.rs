//! Timing and size metrics for one evaluation.

/// Metrics collected by
/// [`FieldEvaluator::evaluate_with_metrics`](crate::FieldEvaluator::evaluate_with_metrics).
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalMetrics {
    /// Wall-clock time for the whole evaluation.
    pub total_us: u64,
    /// Wall-clock time of the prediction phase.
    pub predict_us: u64,
    /// Number of predictor invocations.
    pub predict_calls: usize,
    /// Number of parameter vectors evaluated.
    pub batch: usize,
    /// Sample points per parameter vector, `n_r * n_theta`.
    pub points: usize,
}

impl EvalMetrics {
    /// Total scalar predictions produced, `batch * points`.
    pub fn predictions(&self) -> usize {
        self.batch * self.points
    }
}
