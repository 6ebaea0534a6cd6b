//! Parameter vector storage.

use smallvec::SmallVec;

/// One physical parameter vector (e.g. viscosity, aspect ratio, planet mass).
///
/// Disk models take a handful of parameters, so the values are stored
/// inline; longer vectors spill to the heap transparently.
pub type ParameterVector = SmallVec<[f64; 4]>;
