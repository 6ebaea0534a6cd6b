//! Staggered polar grids for diskonet.
//!
//! A single logical mesh (radius × azimuth) is mapped onto the three
//! sample-point layouts of a staggered finite-volume discretization:
//! cell-centred scalars, radially staggered velocity, and azimuthally
//! staggered velocity.
//!
//! # Types
//!
//! - [`DomainSpec`]: validated bounds and cell counts
//! - [`DiskSetup`]: the run-configuration block a domain is read from
//! - [`StaggeredGrid`]: lazily derived node, edge, middle, and sample arrays
//! - [`SampleGrid`]: one quantity's `(n_r, n_theta, 2)` sample points
//!
//! Every 2-D array uses axis order `(radial, azimuthal)`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod domain;
pub mod sample;
pub mod staggered;

#[cfg(test)]
pub(crate) mod invariants;

pub use domain::{DiskSetup, DomainSpec};
pub use sample::SampleGrid;
pub use staggered::{PolarAxis, StaggeredGrid};
