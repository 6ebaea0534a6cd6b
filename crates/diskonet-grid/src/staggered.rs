//! Staggered polar grid with lazily derived coordinate arrays.

use crate::domain::DomainSpec;
use crate::sample::SampleGrid;
use diskonet_core::{AxisPlacement, GridError, QuantityLayout};
use ndarray::{Array1, Axis, Slice};
use std::sync::OnceLock;
use tracing::trace;

/// One of the two mesh axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolarAxis {
    /// Radius, axis 0 of every 2-D array.
    Radial,
    /// Azimuth, axis 1 of every 2-D array.
    Azimuthal,
}

/// A polar mesh that derives edge, middle, and per-quantity sample
/// coordinates on first access.
///
/// Every derived array is computed once into a [`OnceLock`] and then
/// shared read-only, so a single grid can serve any number of concurrent
/// evaluations. All arrays are pure functions of the [`DomainSpec`]: two
/// grids built from equal domains return bit-identical values.
///
/// # Examples
///
/// ```
/// use diskonet_grid::StaggeredGrid;
/// use diskonet_core::QuantityLayout;
/// use std::f64::consts::PI;
///
/// let grid = StaggeredGrid::new(1.0, 2.0, -PI, PI, 4, 8).unwrap();
/// assert_eq!(grid.r_nodes().to_vec(), vec![1.0, 1.25, 1.5, 1.75, 2.0]);
/// assert_eq!(grid.r_middle().to_vec(), vec![1.125, 1.375, 1.625, 1.875]);
///
/// let v_r = grid.sample_grid(QuantityLayout::RadialVelocity);
/// assert_eq!(v_r.mesh().dim(), (4, 8, 2));
/// assert_eq!(v_r.point(1, 0).unwrap()[0], 1.25);
/// ```
#[derive(Clone, Debug)]
pub struct StaggeredGrid {
    domain: DomainSpec,
    r_nodes: OnceLock<Array1<f64>>,
    theta_nodes: OnceLock<Array1<f64>>,
    r_edge: OnceLock<Array1<f64>>,
    r_middle: OnceLock<Array1<f64>>,
    theta_edge: OnceLock<Array1<f64>>,
    theta_middle: OnceLock<Array1<f64>>,
    samples: [OnceLock<SampleGrid>; 3],
}

impl StaggeredGrid {
    /// Validate the bounds and counts and build a grid.
    ///
    /// Returns `Err(GridError::InvalidDomain)` for degenerate, inverted,
    /// or non-finite bounds and for zero cell counts. Nothing is derived
    /// until first access.
    pub fn new(
        r_min: f64,
        r_max: f64,
        theta_min: f64,
        theta_max: f64,
        n_r: usize,
        n_theta: usize,
    ) -> Result<Self, GridError> {
        let domain = DomainSpec::new(r_min, r_max, theta_min, theta_max, n_r, n_theta)?;
        Ok(Self::from_domain(domain))
    }

    /// Build a grid over an already validated domain.
    pub fn from_domain(domain: DomainSpec) -> Self {
        Self {
            domain,
            r_nodes: OnceLock::new(),
            theta_nodes: OnceLock::new(),
            r_edge: OnceLock::new(),
            r_middle: OnceLock::new(),
            theta_edge: OnceLock::new(),
            theta_middle: OnceLock::new(),
            samples: [OnceLock::new(), OnceLock::new(), OnceLock::new()],
        }
    }

    /// The domain this grid was built from.
    pub fn domain(&self) -> &DomainSpec {
        &self.domain
    }

    /// `(n_r, n_theta)`.
    pub fn shape(&self) -> (usize, usize) {
        self.domain.shape()
    }

    /// `n_r + 1` radial nodes spanning `[r_min, r_max]`.
    pub fn r_nodes(&self) -> &Array1<f64> {
        self.r_nodes.get_or_init(|| {
            let d = &self.domain;
            let nodes = uniform_nodes(d.r_min(), d.r_max(), d.n_r());
            trace!(axis = "r", len = nodes.len(), "derived nodes");
            nodes
        })
    }

    /// `n_theta + 1` azimuthal nodes spanning `[theta_min, theta_max]`.
    pub fn theta_nodes(&self) -> &Array1<f64> {
        self.theta_nodes.get_or_init(|| {
            let d = &self.domain;
            let nodes = uniform_nodes(d.theta_min(), d.theta_max(), d.n_theta());
            trace!(axis = "theta", len = nodes.len(), "derived nodes");
            nodes
        })
    }

    /// Lower edge of each radial cell: the first `n_r` nodes.
    pub fn r_edge(&self) -> &Array1<f64> {
        self.r_edge.get_or_init(|| lower_edges(self.r_nodes()))
    }

    /// Centre of each radial cell.
    pub fn r_middle(&self) -> &Array1<f64> {
        self.r_middle.get_or_init(|| midpoints(self.r_nodes()))
    }

    /// Lower edge of each azimuthal cell: the first `n_theta` nodes.
    pub fn theta_edge(&self) -> &Array1<f64> {
        self.theta_edge.get_or_init(|| lower_edges(self.theta_nodes()))
    }

    /// Centre of each azimuthal cell.
    pub fn theta_middle(&self) -> &Array1<f64> {
        self.theta_middle
            .get_or_init(|| midpoints(self.theta_nodes()))
    }

    /// The cell-resolution array for `axis` at `placement`.
    pub fn axis(&self, axis: PolarAxis, placement: AxisPlacement) -> &Array1<f64> {
        match (axis, placement) {
            (PolarAxis::Radial, AxisPlacement::Edge) => self.r_edge(),
            (PolarAxis::Radial, AxisPlacement::Middle) => self.r_middle(),
            (PolarAxis::Azimuthal, AxisPlacement::Edge) => self.theta_edge(),
            (PolarAxis::Azimuthal, AxisPlacement::Middle) => self.theta_middle(),
        }
    }

    /// Radial coordinates of `layout`'s samples (axis labels for plots).
    pub fn radial_axis(&self, layout: QuantityLayout) -> &Array1<f64> {
        self.axis(PolarAxis::Radial, layout.radial_placement())
    }

    /// Azimuthal coordinates of `layout`'s samples (axis labels for plots).
    pub fn azimuthal_axis(&self, layout: QuantityLayout) -> &Array1<f64> {
        self.axis(PolarAxis::Azimuthal, layout.azimuthal_placement())
    }

    /// The `(n_r, n_theta, 2)` sample points of `layout`.
    pub fn sample_grid(&self, layout: QuantityLayout) -> &SampleGrid {
        self.samples[layout.index()].get_or_init(|| {
            let grid = SampleGrid::outer(
                layout,
                self.radial_axis(layout),
                self.azimuthal_axis(layout),
            );
            trace!(%layout, points = grid.len(), "derived sample grid");
            grid
        })
    }

    /// Resolve a layout by its configuration name (`"sigma"`, `"v_r"`,
    /// `"v_theta"`) and return its sample points.
    ///
    /// Returns `Err(GridError::UnknownLayout)` for any other name.
    pub fn sample_grid_by_name(&self, name: &str) -> Result<&SampleGrid, GridError> {
        let layout: QuantityLayout = name.parse()?;
        Ok(self.sample_grid(layout))
    }
}

/// `n + 1` evenly spaced values over `[lo, hi]` with both endpoints exact.
fn uniform_nodes(lo: f64, hi: f64, n: usize) -> Array1<f64> {
    let step = (hi - lo) / n as f64;
    Array1::from_shape_fn(n + 1, |i| if i == n { hi } else { lo + step * i as f64 })
}

fn lower_edges(nodes: &Array1<f64>) -> Array1<f64> {
    nodes.slice_axis(Axis(0), Slice::from(..-1)).to_owned()
}

/// Average of adjacent nodes, so the centres stay correct for
/// non-uniform node spacing.
fn midpoints(nodes: &Array1<f64>) -> Array1<f64> {
    let upper = nodes.slice_axis(Axis(0), Slice::from(1..));
    let lower = nodes.slice_axis(Axis(0), Slice::from(..-1));
    (&upper + &lower) / 2.0
}
