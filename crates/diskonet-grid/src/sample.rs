//! Per-quantity sample points on the staggered mesh.

use diskonet_core::QuantityLayout;
use ndarray::{Array1, Array2, Array3, ArrayView2};

/// The `(r, theta)` sample points of one quantity.
///
/// Stored both as the `(n_r, n_theta, 2)` mesh (radial index on axis 0,
/// azimuthal index on axis 1, `(r, theta)` on the last axis) and as the
/// row-major flattened `(n_r * n_theta, 2)` point list. Point `(i, j)`
/// sits at flat row `i * n_theta + j` in both views.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    layout: QuantityLayout,
    mesh: Array3<f64>,
    points: Array2<f64>,
}

impl SampleGrid {
    /// Outer (`ij`-indexed meshgrid) combination of a radial and an
    /// azimuthal coordinate array.
    pub(crate) fn outer(
        layout: QuantityLayout,
        radial: &Array1<f64>,
        azimuthal: &Array1<f64>,
    ) -> Self {
        let n_r = radial.len();
        let n_theta = azimuthal.len();
        let mesh = Array3::from_shape_fn((n_r, n_theta, 2), |(i, j, c)| {
            if c == 0 {
                radial[i]
            } else {
                azimuthal[j]
            }
        });
        let points = Array2::from_shape_fn((n_r * n_theta, 2), |(k, c)| {
            mesh[[k / n_theta, k % n_theta, c]]
        });
        Self {
            layout,
            mesh,
            points,
        }
    }

    /// The quantity these points belong to.
    pub fn layout(&self) -> QuantityLayout {
        self.layout
    }

    /// `(n_r, n_theta)`.
    pub fn shape(&self) -> (usize, usize) {
        let (n_r, n_theta, _) = self.mesh.dim();
        (n_r, n_theta)
    }

    /// Number of sample points, `n_r * n_theta`.
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    /// Always returns `false`: a validated domain has at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The `(n_r, n_theta, 2)` mesh.
    pub fn mesh(&self) -> &Array3<f64> {
        &self.mesh
    }

    /// The row-major `(n_r * n_theta, 2)` point list.
    pub fn points(&self) -> ArrayView2<'_, f64> {
        self.points.view()
    }

    /// `(r, theta)` of point `(i, j)`, or `None` out of range.
    pub fn point(&self, i: usize, j: usize) -> Option<[f64; 2]> {
        let (n_r, n_theta) = self.shape();
        if i >= n_r || j >= n_theta {
            return None;
        }
        Some([self.mesh[[i, j, 0]], self.mesh[[i, j, 1]]])
    }

    /// Flat row of point `(i, j)` in [`points`](Self::points).
    pub fn flat_index(&self, i: usize, j: usize) -> usize {
        let (_, n_theta) = self.shape();
        i * n_theta + j
    }
}
