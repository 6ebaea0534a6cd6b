//! Evaluation configuration.

/// Knobs for [`FieldEvaluator`](crate::FieldEvaluator).
///
/// The defaults reproduce a plain sequential evaluation that refuses to
/// hand back NaN or infinite predictions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Evaluate parameter vectors on the rayon thread pool. Output order
    /// still follows the input batch. Default: `false`.
    pub parallel: bool,
    /// Fail with `EvalError::NonFinite` when the predictor returns NaN or
    /// infinity. Default: `true`.
    pub reject_non_finite: bool,
    /// Use one stacked call for predictors that report
    /// `BatchCapability::Vectorized`. When `false`, every predictor is
    /// called once per vector. Default: `true`.
    pub respect_capability: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            reject_non_finite: true,
            respect_capability: true,
        }
    }
}
