//! Integration test: from a run's setup block to sample grids.

use diskonet_core::{GridError, QuantityLayout};
use diskonet_grid::{DiskSetup, StaggeredGrid};
use std::f64::consts::PI;

fn setup(json: &str) -> DiskSetup {
    serde_json::from_str(json).unwrap()
}

#[test]
fn setup_block_builds_all_three_sample_grids() {
    let grid = StaggeredGrid::from_domain(
        setup(r#"{"ymin": 0.4, "ymax": 2.5, "ny": "32", "nx": 96}"#)
            .domain()
            .unwrap(),
    );
    assert_eq!(grid.shape(), (32, 96));
    assert_eq!(grid.theta_nodes()[0], -PI);
    assert_eq!(grid.theta_nodes()[96], PI);

    for layout in QuantityLayout::ALL {
        let sample = grid.sample_grid(layout);
        assert_eq!(sample.mesh().dim(), (32, 96, 2));
        assert_eq!(sample.points().dim(), (32 * 96, 2));
        assert_eq!(sample.point(0, 0).unwrap()[0], grid.radial_axis(layout)[0]);
    }

    // Edges start on the inner boundary; middles sit half a cell inside.
    let dr = (2.5 - 0.4) / 32.0;
    let scalar = grid.sample_grid(QuantityLayout::Scalar).point(0, 0).unwrap();
    assert!((scalar[0] - (0.4 + 0.5 * dr)).abs() < 1e-12);
    let v_r = grid.sample_grid(QuantityLayout::RadialVelocity).point(0, 0).unwrap();
    assert_eq!(v_r[0], 0.4);
    let v_theta = grid.sample_grid(QuantityLayout::AzimuthalVelocity).point(0, 0).unwrap();
    assert_eq!(v_theta[1], -PI);
}

#[test]
fn layouts_resolve_by_name() {
    let grid = StaggeredGrid::new(1.0, 2.0, -PI, PI, 4, 8).unwrap();
    for (name, layout) in [
        ("sigma", QuantityLayout::Scalar),
        ("v_r", QuantityLayout::RadialVelocity),
        ("v_theta", QuantityLayout::AzimuthalVelocity),
    ] {
        let by_name = grid.sample_grid_by_name(name).unwrap();
        assert!(std::ptr::eq(by_name, grid.sample_grid(layout)));
    }
    assert_eq!(
        grid.sample_grid_by_name("pressure").unwrap_err(),
        GridError::UnknownLayout {
            name: "pressure".into()
        }
    );
}

#[test]
fn bad_setups_are_rejected() {
    let negative = setup(r#"{"ymin": 0.4, "ymax": 2.5, "ny": 32, "nx": -96}"#);
    assert!(matches!(
        negative.domain(),
        Err(GridError::InvalidDomain { .. })
    ));

    let inverted = setup(r#"{"ymin": 2.5, "ymax": 0.4, "ny": 32, "nx": 96}"#);
    assert!(matches!(
        inverted.domain(),
        Err(GridError::InvalidDomain { .. })
    ));

    let zero = setup(r#"{"ymin": 0.4, "ymax": 2.5, "ny": 32, "nx": 96}"#).with_resolution(0, 96);
    assert!(zero.domain().is_err());
}
