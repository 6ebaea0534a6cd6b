//! Ordered batches of physical parameter vectors.

use diskonet_core::{EvalError, ParameterVector};
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// A `(batch, n_params)` matrix of physical parameter vectors.
///
/// Row order is preserved through evaluation: row `b` of the batch
/// produces slice `b` of the resulting field.
///
/// # Examples
///
/// ```
/// use diskonet_eval::ParameterBatch;
///
/// let batch = ParameterBatch::from_rows([[1e-3, 0.05, 1e-3], [1e-4, 0.07, 5e-4]]).unwrap();
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch.n_params(), 3);
/// assert!(ParameterBatch::from_rows([vec![1.0, 2.0], vec![3.0]]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterBatch {
    values: Array2<f64>,
}

impl ParameterBatch {
    /// Wrap an existing `(batch, n_params)` matrix.
    pub fn from_array(values: Array2<f64>) -> Self {
        Self { values }
    }

    /// Build a batch from rows, rejecting rows of unequal length.
    ///
    /// An empty iterator gives an empty batch; evaluation rejects it.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, EvalError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut flat = Vec::new();
        let mut width = None;
        let mut count = 0usize;
        for (row, values) in rows.into_iter().enumerate() {
            let values = values.as_ref();
            let expected = *width.get_or_insert(values.len());
            if values.len() != expected {
                return Err(EvalError::RaggedBatch {
                    row,
                    expected,
                    actual: values.len(),
                });
            }
            flat.extend_from_slice(values);
            count += 1;
        }
        let width = width.unwrap_or(0);
        let values = Array2::from_shape_fn((count, width), |(b, p)| flat[b * width + p]);
        Ok(Self { values })
    }

    /// A batch holding one vector.
    pub fn single(values: &[f64]) -> Self {
        Self {
            values: Array1::from(values.to_vec()).insert_axis(Axis(0)),
        }
    }

    /// Number of parameter vectors.
    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    /// `true` if the batch has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.nrows() == 0
    }

    /// Width of each parameter vector.
    pub fn n_params(&self) -> usize {
        self.values.ncols()
    }

    /// Row `b`. Panics if `b >= len()`.
    pub fn row(&self, b: usize) -> ArrayView1<'_, f64> {
        self.values.row(b)
    }

    /// The underlying `(batch, n_params)` matrix.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Copy the rows out as [`ParameterVector`]s.
    pub fn to_vectors(&self) -> Vec<ParameterVector> {
        self.values
            .rows()
            .into_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}
