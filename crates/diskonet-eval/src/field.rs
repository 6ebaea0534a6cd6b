//! Evaluated fields on a quantity's sample grid.

use crate::summary::FieldRange;
use diskonet_core::QuantityLayout;
use ndarray::{Array3, ArrayView2, Axis};

/// Predictions for one quantity across a parameter batch.
///
/// Values have shape `(batch, n_r, n_theta)`: axis 0 follows the input
/// batch order and the remaining axes follow the grid's
/// `(radial, azimuthal)` order.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionField {
    layout: QuantityLayout,
    values: Array3<f64>,
}

impl PredictionField {
    pub(crate) fn new(layout: QuantityLayout, values: Array3<f64>) -> Self {
        Self { layout, values }
    }

    /// The quantity these values belong to.
    pub fn layout(&self) -> QuantityLayout {
        self.layout
    }

    /// Number of parameter vectors evaluated.
    pub fn batch(&self) -> usize {
        self.values.len_of(Axis(0))
    }

    /// `(n_r, n_theta)` of each 2-D slice.
    pub fn shape(&self) -> (usize, usize) {
        let (_, n_r, n_theta) = self.values.dim();
        (n_r, n_theta)
    }

    /// The field for parameter vector `b`, or `None` out of range.
    pub fn get(&self, b: usize) -> Option<ArrayView2<'_, f64>> {
        (b < self.batch()).then(|| self.values.index_axis(Axis(0), b))
    }

    /// The 2-D field when exactly one parameter vector was evaluated.
    pub fn single(&self) -> Option<ArrayView2<'_, f64>> {
        (self.batch() == 1).then(|| self.values.index_axis(Axis(0), 0))
    }

    /// Iterate over the per-vector 2-D fields in batch order.
    pub fn iter(&self) -> impl Iterator<Item = ArrayView2<'_, f64>> {
        self.values.outer_iter()
    }

    /// All values, `(batch, n_r, n_theta)`.
    pub fn values(&self) -> &Array3<f64> {
        &self.values
    }

    /// Take ownership of the values.
    pub fn into_values(self) -> Array3<f64> {
        self.values
    }

    /// Finite value range of slice `b`.
    pub fn range(&self, b: usize) -> Option<FieldRange> {
        self.get(b).and_then(|v| FieldRange::of(v.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> PredictionField {
        let values = Array3::from_shape_fn((2, 3, 4), |(b, i, j)| (b * 100 + i * 10 + j) as f64);
        PredictionField::new(QuantityLayout::Scalar, values)
    }

    #[test]
    fn slices_follow_batch_order() {
        let f = field();
        assert_eq!(f.batch(), 2);
        assert_eq!(f.shape(), (3, 4));
        assert_eq!(f.get(1).unwrap()[[2, 3]], 123.0);
        assert!(f.get(2).is_none());
        assert!(f.single().is_none());
        let firsts: Vec<f64> = f.iter().map(|s| s[[0, 0]]).collect();
        assert_eq!(firsts, vec![0.0, 100.0]);
    }

    #[test]
    fn single_slice_for_batch_of_one() {
        let f = PredictionField::new(
            QuantityLayout::RadialVelocity,
            Array3::from_elem((1, 2, 2), 7.0),
        );
        assert_eq!(f.single().unwrap().dim(), (2, 2));
        assert_eq!(f.layout(), QuantityLayout::RadialVelocity);
    }

    #[test]
    fn range_of_slice() {
        let f = field();
        let r = f.range(1).unwrap();
        assert_eq!((r.vmin, r.vmax), (100.0, 123.0));
        assert!(f.range(5).is_none());
        assert_eq!(f.into_values().dim(), (2, 3, 4));
    }
}
