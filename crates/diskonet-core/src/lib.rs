//! Core types for diskonet field evaluation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the grid and evaluation crates: the closed set of
//! staggered [`QuantityLayout`]s, where each layout places its samples on
//! an axis ([`AxisPlacement`]), the [`ParameterVector`] type, and the
//! error enums raised by every other crate in the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod layout;
pub mod param;

pub use error::{EvalError, GridError};
pub use layout::{AxisPlacement, QuantityLayout};
pub use param::ParameterVector;
