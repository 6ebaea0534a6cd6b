//! The [`Predictor`] trait: the seam between geometry and the trained model.
//!
//! The model's forward pass is opaque to this crate. A predictor receives
//! parameter rows (`u_net`) and coordinate rows (`y_net`) of equal length
//! and returns one scalar per row.

use ndarray::ArrayView2;

/// How many parameter vectors a predictor can take in one call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BatchCapability {
    /// One call per parameter vector, with that vector tiled across every
    /// sample point.
    #[default]
    PerVector,
    /// One call for the whole batch: rows are stacked batch-major, so row
    /// `b * n + k` pairs parameter vector `b` with sample point `k`.
    Vectorized,
}

/// Row-aligned inputs for one predictor call.
#[derive(Clone, Copy, Debug)]
pub struct PredictInput<'a> {
    u_net: ArrayView2<'a, f64>,
    y_net: ArrayView2<'a, f64>,
}

impl<'a> PredictInput<'a> {
    /// Pair parameter rows `(rows, n_params)` with coordinate rows `(rows, 2)`.
    pub fn new(u_net: ArrayView2<'a, f64>, y_net: ArrayView2<'a, f64>) -> Self {
        debug_assert_eq!(u_net.nrows(), y_net.nrows(), "u_net/y_net row mismatch");
        debug_assert_eq!(y_net.ncols(), 2, "y_net must hold (r, theta) pairs");
        Self { u_net, y_net }
    }

    /// Parameter rows, `(rows, n_params)`.
    pub fn u_net(&self) -> ArrayView2<'a, f64> {
        self.u_net
    }

    /// `(r, theta)` rows, `(rows, 2)`.
    pub fn y_net(&self) -> ArrayView2<'a, f64> {
        self.y_net
    }

    /// Number of rows; the predictor must return exactly this many values.
    pub fn rows(&self) -> usize {
        self.y_net.nrows()
    }
}

/// A trained model's forward pass, treated as a pure function.
///
/// # Contract
///
/// - `predict()` must return exactly `input.rows()` values, row-aligned
///   with the input. The evaluator rejects any other length.
/// - `predict()` must be side-effect free: the evaluator may call it from
///   several threads at once and in any order.
///
/// # Examples
///
/// ```
/// use diskonet_eval::{PredictInput, Predictor};
///
/// /// Density falling off as r^-p, with p the first parameter.
/// struct PowerLaw;
///
/// impl Predictor for PowerLaw {
///     fn name(&self) -> &str { "power_law" }
///
///     fn n_params(&self) -> Option<usize> { Some(1) }
///
///     fn predict(&self, input: &PredictInput<'_>) -> Vec<f64> {
///         let u = input.u_net();
///         let y = input.y_net();
///         (0..input.rows()).map(|k| y[[k, 0]].powf(-u[[k, 0]])).collect()
///     }
/// }
///
/// assert_eq!(PowerLaw.name(), "power_law");
/// ```
pub trait Predictor: Send + Sync {
    /// Human-readable name for logging and error reporting.
    fn name(&self) -> &str;

    /// Calling convention this predictor supports. Default: per vector.
    fn capability(&self) -> BatchCapability {
        BatchCapability::PerVector
    }

    /// Width of the parameter vectors this predictor accepts, if fixed.
    fn n_params(&self) -> Option<usize> {
        None
    }

    /// Evaluate one scalar per input row.
    fn predict(&self, input: &PredictInput<'_>) -> Vec<f64>;
}

impl<P: Predictor + ?Sized> Predictor for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn capability(&self) -> BatchCapability {
        (**self).capability()
    }

    fn n_params(&self) -> Option<usize> {
        (**self).n_params()
    }

    fn predict(&self, input: &PredictInput<'_>) -> Vec<f64> {
        (**self).predict(input)
    }
}

impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn capability(&self) -> BatchCapability {
        (**self).capability()
    }

    fn n_params(&self) -> Option<usize> {
        (**self).n_params()
    }

    fn predict(&self, input: &PredictInput<'_>) -> Vec<f64> {
        (**self).predict(input)
    }
}

/// A [`Predictor`] backed by a closure.
///
/// # Examples
///
/// ```
/// use diskonet_eval::{BatchCapability, FnPredictor, PredictInput, Predictor};
///
/// let radius = FnPredictor::new("radius", |input: &PredictInput<'_>| {
///     input.y_net().column(0).to_vec()
/// })
/// .vectorized();
/// assert_eq!(radius.capability(), BatchCapability::Vectorized);
/// ```
pub struct FnPredictor<F> {
    name: String,
    f: F,
    capability: BatchCapability,
    n_params: Option<usize>,
}

impl<F> FnPredictor<F>
where
    F: Fn(&PredictInput<'_>) -> Vec<f64> + Send + Sync,
{
    /// Wrap `f` as a per-vector predictor named `name`.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
            capability: BatchCapability::PerVector,
            n_params: None,
        }
    }

    /// Declare that `f` accepts the whole batch in one call.
    pub fn vectorized(mut self) -> Self {
        self.capability = BatchCapability::Vectorized;
        self
    }

    /// Declare the parameter width `f` expects.
    pub fn with_n_params(mut self, n_params: usize) -> Self {
        self.n_params = Some(n_params);
        self
    }
}

impl<F> Predictor for FnPredictor<F>
where
    F: Fn(&PredictInput<'_>) -> Vec<f64> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn capability(&self) -> BatchCapability {
        self.capability
    }

    fn n_params(&self) -> Option<usize> {
        self.n_params
    }

    fn predict(&self, input: &PredictInput<'_>) -> Vec<f64> {
        (self.f)(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn fn_predictor_forwards_to_closure() {
        let p = FnPredictor::new("sum", |input: &PredictInput<'_>| {
            let u = input.u_net();
            let y = input.y_net();
            (0..input.rows()).map(|k| u[[k, 0]] + y[[k, 0]] + y[[k, 1]]).collect()
        });
        let u = array![[1.0], [2.0]];
        let y = array![[10.0, 100.0], [20.0, 200.0]];
        let out = p.predict(&PredictInput::new(u.view(), y.view()));
        assert_eq!(out, vec![111.0, 222.0]);
        assert_eq!(p.name(), "sum");
        assert_eq!(p.capability(), BatchCapability::PerVector);
        assert_eq!(p.n_params(), None);
    }

    #[test]
    fn builders_set_capability_and_width() {
        let p = FnPredictor::new("zeros", |input: &PredictInput<'_>| vec![0.0; input.rows()])
            .vectorized()
            .with_n_params(3);
        assert_eq!(p.capability(), BatchCapability::Vectorized);
        assert_eq!(p.n_params(), Some(3));
    }

    #[test]
    fn boxed_and_borrowed_predictors_delegate() {
        let p = FnPredictor::new("ones", |input: &PredictInput<'_>| vec![1.0; input.rows()])
            .with_n_params(2);
        let boxed: Box<dyn Predictor> = Box::new(p);
        let borrowed = &boxed;
        assert_eq!(borrowed.name(), "ones");
        assert_eq!(borrowed.n_params(), Some(2));
        let u = array![[0.0, 0.0]];
        let y = array![[1.0, 0.0]];
        assert_eq!(borrowed.predict(&PredictInput::new(u.view(), y.view())), vec![1.0]);
    }
}
