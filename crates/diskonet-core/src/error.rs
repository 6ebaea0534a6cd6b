//! Error types for grid construction and field evaluation.
//!
//! Every error is raised synchronously at the offending call. Nothing is
//! retried internally: all operations are deterministic, so retrying with
//! the same inputs reproduces the same error.

use std::error::Error;
use std::fmt;

/// Errors from building a staggered grid or resolving a layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The domain has degenerate or inverted bounds, non-finite bounds,
    /// or a cell count below one.
    InvalidDomain {
        /// What went wrong.
        reason: String,
    },
    /// A layout name outside the three known quantities.
    UnknownLayout {
        /// The name that failed to resolve.
        name: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { reason } => write!(f, "invalid domain: {reason}"),
            Self::UnknownLayout { name } => {
                write!(
                    f,
                    "unknown layout '{name}' (expected one of sigma, v_r, v_theta)"
                )
            }
        }
    }
}

impl Error for GridError {}

/// Errors from evaluating a prediction field.
///
/// There is no partial success: when any of these is returned, no field
/// was produced.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalError {
    /// The parameter batch has no rows.
    EmptyBatch,
    /// The predictor returned the wrong number of values.
    ShapeMismatch {
        /// Index of the parameter vector being evaluated, or `None` for a
        /// single vectorized call over the whole batch.
        parameter_index: Option<usize>,
        /// Number of values required.
        expected: usize,
        /// Number of values returned.
        actual: usize,
    },
    /// The batch width disagrees with the predictor's declared input width.
    ParameterWidth {
        /// Width the predictor accepts.
        expected: usize,
        /// Width of the supplied batch.
        actual: usize,
    },
    /// Rows of a parameter batch have different lengths.
    RaggedBatch {
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// A control value lies outside its parameter axis.
    ParameterOutOfRange {
        /// Axis name.
        name: String,
        /// The offending value.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },
    /// A named parameter column is missing or unexpected.
    UnknownParameter {
        /// The column name.
        name: String,
    },
    /// A named parameter column has a different length from the first.
    ColumnLength {
        /// The column name.
        name: String,
        /// Length of the first column.
        expected: usize,
        /// Length of this column.
        actual: usize,
    },
    /// The predictor produced NaN or infinity.
    NonFinite {
        /// Index of the parameter vector.
        parameter_index: usize,
        /// Flattened (row-major) index of the first bad sample point.
        point_index: usize,
    },
    /// The grid could not be resolved.
    Grid(GridError),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBatch => write!(f, "parameter batch is empty"),
            Self::ShapeMismatch {
                parameter_index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "predictor returned {actual} values, expected {expected}"
                )?;
                if let Some(idx) = parameter_index {
                    write!(f, " for parameter vector {idx}")?;
                }
                Ok(())
            }
            Self::ParameterWidth { expected, actual } => {
                write!(
                    f,
                    "parameter vectors have {actual} entries, predictor expects {expected}"
                )
            }
            Self::RaggedBatch {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "parameter row {row} has {actual} entries, expected {expected}"
                )
            }
            Self::ParameterOutOfRange {
                name,
                value,
                min,
                max,
            } => {
                write!(f, "parameter '{name}' = {value} outside [{min}, {max}]")
            }
            Self::UnknownParameter { name } => write!(f, "unknown parameter '{name}'"),
            Self::ColumnLength {
                name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "parameter column '{name}' has {actual} values, expected {expected}"
                )
            }
            Self::NonFinite {
                parameter_index,
                point_index,
            } => {
                write!(
                    f,
                    "non-finite prediction for parameter vector {parameter_index} at point {point_index}"
                )
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for EvalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for EvalError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
