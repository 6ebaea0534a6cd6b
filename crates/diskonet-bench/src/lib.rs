//! Benchmark profiles for diskonet.
//!
//! - [`reference_profile`]: 128x384 mesh with 16 sampled parameter vectors
//! - [`stress_profile`]: 512x1536 mesh (~786K cells) with 64 vectors

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use diskonet_eval::{ParameterBatch, ParameterSpace};
use diskonet_grid::{DiskSetup, StaggeredGrid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// A grid and a batch ready to evaluate.
pub struct Profile {
    /// Grid over `[0.4, 2.5] x [-π, π]`.
    pub grid: StaggeredGrid,
    /// Parameters drawn from the default disk space.
    pub params: ParameterBatch,
}

/// Reference profile: 128x384 cells, 16 vectors.
pub fn reference_profile(seed: u64) -> Profile {
    profile(128, 384, 16, seed)
}

/// Stress profile: 512x1536 cells, 64 vectors.
pub fn stress_profile(seed: u64) -> Profile {
    profile(512, 1536, 64, seed)
}

fn profile(n_r: i64, n_theta: i64, batch: usize, seed: u64) -> Profile {
    let setup = DiskSetup {
        ymin: 0.4,
        ymax: 2.5,
        xmin: -PI,
        xmax: PI,
        ny: n_r,
        nx: n_theta,
    };
    let grid = StaggeredGrid::from_domain(setup.domain().unwrap());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let params = ParameterSpace::ppd_default().sample(&mut rng, batch);
    Profile { grid, params }
}
