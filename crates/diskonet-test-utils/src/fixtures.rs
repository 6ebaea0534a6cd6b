//! Reusable predictor fixtures.
//!
//! - [`ArangePredictor`]: returns `0, 1, 2, ...` per call
//! - [`TaggingPredictor`]: encodes the first parameter and the row index
//! - [`WrongLengthPredictor`]: returns too few values
//! - [`NanPredictor`]: injects NaN at one row
//! - [`CountingPredictor`]: counts calls to an inner predictor
//! - [`AnalyticDiskPredictor`]: a smooth gapped disk, vectorized

use diskonet_eval::{BatchCapability, PredictInput, Predictor};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the row index of every input row.
///
/// Reshaped onto an `(n_r, n_theta)` mesh the output must read
/// `i * n_theta + j` at `(i, j)`.
pub struct ArangePredictor;

impl Predictor for ArangePredictor {
    fn name(&self) -> &str {
        "arange"
    }

    fn predict(&self, input: &PredictInput<'_>) -> Vec<f64> {
        (0..input.rows()).map(|k| k as f64).collect()
    }
}

/// Returns `u[0] * 1e6 + k` for row `k`.
pub struct TaggingPredictor;

impl TaggingPredictor {
    /// Recover `(first parameter, row)` from an output value.
    pub fn decode(value: f64) -> (f64, usize) {
        let tag = (value / 1e6).floor();
        (tag, (value - tag * 1e6) as usize)
    }
}

impl Predictor for TaggingPredictor {
    fn name(&self) -> &str {
        "tagging"
    }

    fn predict(&self, input: &PredictInput<'_>) -> Vec<f64> {
        let u = input.u_net();
        (0..input.rows()).map(|k| u[[k, 0]] * 1e6 + k as f64).collect()
    }
}

/// Returns `short_by` fewer values than requested.
pub struct WrongLengthPredictor {
    pub short_by: usize,
}

impl Predictor for WrongLengthPredictor {
    fn name(&self) -> &str {
        "wrong_length"
    }

    fn predict(&self, input: &PredictInput<'_>) -> Vec<f64> {
        vec![0.0; input.rows().saturating_sub(self.short_by)]
    }
}

/// Returns zeros except NaN at row `at`.
pub struct NanPredictor {
    pub at: usize,
}

impl Predictor for NanPredictor {
    fn name(&self) -> &str {
        "nan"
    }

    fn predict(&self, input: &PredictInput<'_>) -> Vec<f64> {
        (0..input.rows())
            .map(|k| if k == self.at { f64::NAN } else { 0.0 })
            .collect()
    }
}

/// Forwards to `inner`, counting calls and rows.
pub struct CountingPredictor<P> {
    pub inner: P,
    calls: AtomicUsize,
    rows: AtomicUsize,
}

impl<P: Predictor> CountingPredictor<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            rows: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> usize {
        self.rows.load(Ordering::SeqCst)
    }
}

impl<P: Predictor> Predictor for CountingPredictor<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn capability(&self) -> BatchCapability {
        self.inner.capability()
    }

    fn n_params(&self) -> Option<usize> {
        self.inner.n_params()
    }

    fn predict(&self, input: &PredictInput<'_>) -> Vec<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.rows.fetch_add(input.rows(), Ordering::SeqCst);
        self.inner.predict(input)
    }
}

/// Surface density of a disk with a planet-carved gap at `r = 1`.
///
/// Parameters are `[alpha, aspect_ratio, planet_mass]`. The background
/// falls off as `r^-1/2`; the gap floor follows `1 / (1 + 0.04 K)` with
/// `K = q^2 / (alpha h^5)` and the gap width is the aspect ratio. A weak
/// `cos(theta)` term breaks azimuthal symmetry so transposition bugs show.
pub struct AnalyticDiskPredictor {
    capability: BatchCapability,
}

impl AnalyticDiskPredictor {
    /// A vectorized instance.
    pub fn new() -> Self {
        Self {
            capability: BatchCapability::Vectorized,
        }
    }

    /// The same model, called once per vector.
    pub fn per_vector() -> Self {
        Self {
            capability: BatchCapability::PerVector,
        }
    }

    /// Closed-form value at one point.
    pub fn sigma(alpha: f64, h: f64, q: f64, r: f64, theta: f64) -> f64 {
        let k = q * q / (alpha * h.powi(5));
        let depth = 1.0 - 1.0 / (1.0 + 0.04 * k);
        let gap = depth * (-((r - 1.0) / h).powi(2)).exp();
        r.powf(-0.5) * (1.0 - gap) * (1.0 + 0.01 * theta.cos())
    }
}

impl Default for AnalyticDiskPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl Predictor for AnalyticDiskPredictor {
    fn name(&self) -> &str {
        "analytic_disk"
    }

    fn capability(&self) -> BatchCapability {
        self.capability
    }

    fn n_params(&self) -> Option<usize> {
        Some(3)
    }

    fn predict(&self, input: &PredictInput<'_>) -> Vec<f64> {
        let (u, y) = (input.u_net(), input.y_net());
        (0..input.rows())
            .map(|k| Self::sigma(u[[k, 0]], u[[k, 1]], u[[k, 2]], y[[k, 0]], y[[k, 1]]))
            .collect()
    }
}
