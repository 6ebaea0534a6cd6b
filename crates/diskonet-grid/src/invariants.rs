//! Grid invariant assertions shared by the test modules.
//!
//! Each helper checks one family of properties every valid grid must
//! satisfy, whatever its bounds or resolution.

use crate::staggered::StaggeredGrid;
use diskonet_core::QuantityLayout;
use ndarray::Array1;

/// Assert node/edge/middle lengths, endpoints, monotonicity, and the
/// strict `edge < middle < edge + width` ordering for one axis.
pub fn assert_axis_invariants(
    nodes: &Array1<f64>,
    edge: &Array1<f64>,
    middle: &Array1<f64>,
    lo: f64,
    hi: f64,
    n: usize,
) {
    assert_eq!(nodes.len(), n + 1, "node count");
    assert_eq!(edge.len(), n, "edge count");
    assert_eq!(middle.len(), n, "middle count");
    assert_eq!(nodes[0], lo, "first node");
    assert_eq!(nodes[n], hi, "last node");

    for w in nodes.windows(2) {
        assert!(w[0] < w[1], "nodes not strictly increasing: {} >= {}", w[0], w[1]);
    }

    // Edges plus the final node reproduce the nodes exactly.
    let mut rebuilt = edge.to_vec();
    rebuilt.push(nodes[n]);
    assert_eq!(rebuilt, nodes.to_vec(), "edges + last node != nodes");

    let width = (hi - lo) / n as f64;
    for i in 0..n {
        assert!(
            edge[i] < middle[i] && middle[i] < edge[i] + width,
            "middle[{i}] = {} not strictly inside ({}, {})",
            middle[i],
            edge[i],
            edge[i] + width
        );
    }
}

/// Assert that `layout`'s sample grid is the `(radial, azimuthal)` outer
/// product of the layout's two axes, in mesh and flattened form.
pub fn assert_sample_grid_matches_axes(grid: &StaggeredGrid, layout: QuantityLayout) {
    let (n_r, n_theta) = grid.shape();
    let sample = grid.sample_grid(layout);
    let radial = grid.radial_axis(layout);
    let azimuthal = grid.azimuthal_axis(layout);

    assert_eq!(sample.layout(), layout);
    assert_eq!(sample.mesh().dim(), (n_r, n_theta, 2));
    assert_eq!(sample.points().dim(), (n_r * n_theta, 2));

    let points = sample.points();
    for i in 0..n_r {
        for j in 0..n_theta {
            let expected = [radial[i], azimuthal[j]];
            assert_eq!(sample.point(i, j), Some(expected), "{layout} ({i}, {j})");
            let k = i * n_theta + j;
            assert_eq!([points[[k, 0]], points[[k, 1]]], expected, "{layout} flat {k}");
        }
    }
}
