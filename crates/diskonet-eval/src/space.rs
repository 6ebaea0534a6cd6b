//! Named parameter axes and the mapping from control values to physical
//! parameter vectors.
//!
//! A control value is what a caller steers (a slider position, a sample
//! drawn from a prior). For [`ParameterScale::Log10`] axes the control is
//! the base-10 exponent of the physical value.

use crate::batch::ParameterBatch;
use crate::labels::latex_float;
use diskonet_core::{EvalError, ParameterVector};
use indexmap::IndexMap;
use ndarray::Array2;
use rand::Rng;

/// Slack allowed when range-checking controls recovered from physical values.
const RANGE_TOLERANCE: f64 = 1e-9;

/// How a control value maps to a physical value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterScale {
    /// Physical value equals the control value.
    Linear,
    /// Physical value is `10^control`.
    Log10,
}

impl ParameterScale {
    /// Control value to physical value.
    pub fn to_physical(self, control: f64) -> f64 {
        match self {
            Self::Linear => control,
            Self::Log10 => 10f64.powf(control),
        }
    }

    /// Physical value to control value.
    pub fn to_control(self, physical: f64) -> f64 {
        match self {
            Self::Linear => physical,
            Self::Log10 => physical.log10(),
        }
    }
}

/// One parameter's control range.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterAxis {
    /// Column name.
    pub name: String,
    /// Lowest control value.
    pub min: f64,
    /// Highest control value.
    pub max: f64,
    /// Control-to-physical mapping.
    pub scale: ParameterScale,
    /// Initial control value.
    pub default: f64,
}

impl ParameterAxis {
    /// An axis over `[min, max]` defaulting to its midpoint.
    pub fn new(name: impl Into<String>, min: f64, max: f64, scale: ParameterScale) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            scale,
            default: 0.5 * (min + max),
        }
    }

    /// Replace the default control value.
    pub fn with_default(mut self, default: f64) -> Self {
        self.default = default;
        self
    }

    /// `true` if `control` lies in `[min, max]`. NaN never does.
    pub fn contains(&self, control: f64) -> bool {
        control >= self.min && control <= self.max
    }

    /// Reject a control outside `[min, max]`.
    pub fn check(&self, control: f64) -> Result<f64, EvalError> {
        if self.contains(control) {
            Ok(control)
        } else {
            Err(self.out_of_range(control))
        }
    }

    /// Physical value of a control, after range checking.
    pub fn physical(&self, control: f64) -> Result<f64, EvalError> {
        self.check(control).map(|c| self.scale.to_physical(c))
    }

    /// `n` evenly spaced control values from `min` to `max` inclusive.
    pub fn marks(&self, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let step = (self.max - self.min) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { self.max } else { self.min + step * i as f64 })
                    .collect()
            }
        }
    }

    /// Labels for [`marks`](Self::marks), in physical units.
    pub fn mark_labels(&self, n: usize) -> Vec<String> {
        self.marks(n)
            .into_iter()
            .map(|m| match self.scale {
                ParameterScale::Log10 => latex_float(self.scale.to_physical(m)),
                ParameterScale::Linear => format!("{m:.3}"),
            })
            .collect()
    }

    fn check_physical(&self, physical: f64) -> Result<f64, EvalError> {
        let control = self.scale.to_control(physical);
        let slack = RANGE_TOLERANCE * (self.max - self.min).abs().max(1.0);
        if control >= self.min - slack && control <= self.max + slack {
            Ok(physical)
        } else {
            Err(self.out_of_range(control))
        }
    }

    fn out_of_range(&self, value: f64) -> EvalError {
        EvalError::ParameterOutOfRange {
            name: self.name.clone(),
            value,
            min: self.min,
            max: self.max,
        }
    }
}

/// An ordered set of parameter axes.
///
/// Axis order is the column order of every [`ParameterBatch`] built from
/// this space, and must match the order the predictor was trained on.
///
/// # Examples
///
/// ```
/// use diskonet_eval::ParameterSpace;
///
/// let space = ParameterSpace::ppd_default();
/// let batch = space.batch_from_controls([[-3.0, 0.05, -3.0]]).unwrap();
/// let row = batch.row(0);
/// assert!((row[0] - 1e-3).abs() < 1e-15);
/// assert_eq!(row[1], 0.05);
/// assert!(space.physical(&[-1.0, 0.05, -3.0]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSpace {
    axes: IndexMap<String, ParameterAxis>,
}

impl ParameterSpace {
    /// A space over `axes`, in order. A repeated name keeps the first
    /// position and the last definition.
    pub fn new(axes: impl IntoIterator<Item = ParameterAxis>) -> Self {
        let axes = axes
            .into_iter()
            .map(|axis| (axis.name.clone(), axis))
            .collect();
        Self { axes }
    }

    /// Viscosity, aspect ratio and planet mass for a planet-forming disk.
    pub fn ppd_default() -> Self {
        Self::new([
            ParameterAxis::new("alpha", -4.0, -2.0, ParameterScale::Log10).with_default(-3.0),
            ParameterAxis::new("aspectratio", 0.03, 0.1, ParameterScale::Linear)
                .with_default(0.05),
            ParameterAxis::new("planetmass", -5.0, -3.0, ParameterScale::Log10).with_default(-3.0),
        ])
    }

    /// Number of axes.
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// `true` if there are no axes.
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Look up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&ParameterAxis> {
        self.axes.get(name)
    }

    /// Axes in column order.
    pub fn axes(&self) -> impl Iterator<Item = &ParameterAxis> {
        self.axes.values()
    }

    /// Axis names in column order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(String::as_str)
    }

    /// Default control values in column order.
    pub fn defaults(&self) -> Vec<f64> {
        self.axes.values().map(|a| a.default).collect()
    }

    /// Map one control vector to a physical parameter vector.
    ///
    /// # Errors
    ///
    /// [`EvalError::ParameterWidth`] if `controls` has the wrong length,
    /// [`EvalError::ParameterOutOfRange`] for the first control outside
    /// its axis.
    pub fn physical(&self, controls: &[f64]) -> Result<ParameterVector, EvalError> {
        if controls.len() != self.len() {
            return Err(EvalError::ParameterWidth {
                expected: self.len(),
                actual: controls.len(),
            });
        }
        self.axes
            .values()
            .zip(controls)
            .map(|(axis, &c)| axis.physical(c))
            .collect()
    }

    /// A batch from control rows, in row order.
    pub fn batch_from_controls<I, R>(&self, rows: I) -> Result<ParameterBatch, EvalError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let vectors = rows
            .into_iter()
            .map(|row| self.physical(row.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        ParameterBatch::from_rows(vectors)
    }

    /// A batch from named columns of physical values.
    ///
    /// Columns may arrive in any order; they are reordered to axis order.
    /// Every axis needs exactly one column, and all columns need the same
    /// length.
    pub fn batch_from_columns(
        &self,
        columns: &IndexMap<String, Vec<f64>>,
    ) -> Result<ParameterBatch, EvalError> {
        if let Some(extra) = columns.keys().find(|name| !self.axes.contains_key(*name)) {
            return Err(EvalError::UnknownParameter {
                name: extra.clone(),
            });
        }
        let ordered = self
            .axes
            .values()
            .map(|axis| {
                columns
                    .get(&axis.name)
                    .map(|column| (axis, column))
                    .ok_or_else(|| EvalError::UnknownParameter {
                        name: axis.name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows = ordered.first().map_or(0, |(_, column)| column.len());
        for (axis, column) in &ordered {
            if column.len() != rows {
                return Err(EvalError::ColumnLength {
                    name: axis.name.clone(),
                    expected: rows,
                    actual: column.len(),
                });
            }
            for &value in column.iter() {
                axis.check_physical(value)?;
            }
        }

        let values = Array2::from_shape_fn((rows, ordered.len()), |(b, p)| ordered[p].1[b]);
        Ok(ParameterBatch::from_array(values))
    }

    /// Draw `n` vectors uniformly in control space.
    ///
    /// Pass a seeded generator for reproducible draws.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> ParameterBatch {
        let axes: Vec<&ParameterAxis> = self.axes.values().collect();
        let values = Array2::from_shape_fn((n, axes.len()), |(_, p)| {
            let axis = axes[p];
            let control = axis.min + (axis.max - axis.min) * rng.random::<f64>();
            axis.scale.to_physical(control)
        });
        ParameterBatch::from_array(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn ppd_defaults_map_to_reference_physics() {
        let space = ParameterSpace::ppd_default();
        assert_eq!(space.names().collect::<Vec<_>>(), ["alpha", "aspectratio", "planetmass"]);
        assert_eq!(space.defaults(), vec![-3.0, 0.05, -3.0]);
        let p = space.physical(&space.defaults()).unwrap();
        assert!(close(p[0], 1e-3));
        assert_eq!(p[1], 0.05);
        assert!(close(p[2], 1e-3));
    }

    #[test]
    fn out_of_range_control_names_the_axis() {
        let space = ParameterSpace::ppd_default();
        assert_eq!(
            space.physical(&[-3.0, 0.2, -3.0]),
            Err(EvalError::ParameterOutOfRange {
                name: "aspectratio".into(),
                value: 0.2,
                min: 0.03,
                max: 0.1
            })
        );
        assert!(matches!(
            space.physical(&[f64::NAN, 0.05, -3.0]),
            Err(EvalError::ParameterOutOfRange { .. })
        ));
        assert_eq!(
            space.physical(&[-3.0]),
            Err(EvalError::ParameterWidth {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn marks_span_the_axis() {
        let axis = ParameterAxis::new("alpha", -4.0, -2.0, ParameterScale::Log10);
        assert_eq!(axis.default, -3.0);
        let m = axis.marks(4);
        assert_eq!(m.len(), 4);
        assert_eq!(m[0], -4.0);
        assert_eq!(m[3], -2.0);
        assert!(close(m[1], -4.0 + 2.0 / 3.0));
        assert!(axis.marks(0).is_empty());
        assert_eq!(axis.marks(1), vec![-4.0]);
    }

    #[test]
    fn mark_labels_follow_scale() {
        let log = ParameterAxis::new("planetmass", -5.0, -3.0, ParameterScale::Log10);
        assert_eq!(
            log.mark_labels(3),
            vec![
                r"$1.0 \times 10^{-5}$".to_string(),
                r"$1.0 \times 10^{-4}$".to_string(),
                r"$1.0 \times 10^{-3}$".to_string(),
            ]
        );
        let lin = ParameterAxis::new("aspectratio", 0.03, 0.1, ParameterScale::Linear);
        assert_eq!(lin.mark_labels(2), vec!["0.030".to_string(), "0.100".to_string()]);
    }

    #[test]
    fn controls_become_batch_rows_in_order() {
        let space = ParameterSpace::ppd_default();
        let batch = space
            .batch_from_controls([[-4.0, 0.03, -5.0], [-2.0, 0.1, -3.0]])
            .unwrap();
        assert_eq!(batch.len(), 2);
        assert!(close(batch.row(0)[0], 1e-4));
        assert!(close(batch.row(1)[2], 1e-3));
        assert_eq!(batch.row(1)[1], 0.1);
    }

    #[test]
    fn columns_are_reordered_to_axis_order() {
        let space = ParameterSpace::ppd_default();
        let mut columns = IndexMap::new();
        columns.insert("planetmass".to_string(), vec![1e-5, 1e-3]);
        columns.insert("alpha".to_string(), vec![1e-4, 1e-2]);
        columns.insert("aspectratio".to_string(), vec![0.03, 0.1]);
        let batch = space.batch_from_columns(&columns).unwrap();
        assert_eq!(batch.values(), &ndarray::array![[1e-4, 0.03, 1e-5], [1e-2, 0.1, 1e-3]]);
    }

    #[test]
    fn column_errors() {
        let space = ParameterSpace::ppd_default();
        let mut columns = IndexMap::new();
        columns.insert("alpha".to_string(), vec![1e-3]);
        columns.insert("aspectratio".to_string(), vec![0.05]);
        assert_eq!(
            space.batch_from_columns(&columns),
            Err(EvalError::UnknownParameter {
                name: "planetmass".into()
            })
        );

        columns.insert("planetmass".to_string(), vec![1e-3, 1e-4]);
        assert_eq!(
            space.batch_from_columns(&columns),
            Err(EvalError::ColumnLength {
                name: "planetmass".into(),
                expected: 1,
                actual: 2
            })
        );

        columns.insert("planetmass".to_string(), vec![1e-3]);
        columns.insert("gamma".to_string(), vec![1.4]);
        assert_eq!(
            space.batch_from_columns(&columns),
            Err(EvalError::UnknownParameter {
                name: "gamma".into()
            })
        );

        columns.shift_remove("gamma");
        columns.insert("alpha".to_string(), vec![1.0]);
        assert!(matches!(
            space.batch_from_columns(&columns),
            Err(EvalError::ParameterOutOfRange { ref name, .. }) if name == "alpha"
        ));
    }

    #[test]
    fn sampling_is_seeded_and_in_range() {
        let space = ParameterSpace::ppd_default();
        let a = space.sample(&mut ChaCha8Rng::seed_from_u64(7), 64);
        let b = space.sample(&mut ChaCha8Rng::seed_from_u64(7), 64);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        for row in a.values().rows() {
            let controls: Vec<f64> = space
                .axes()
                .zip(row.iter())
                .map(|(axis, &v)| axis.scale.to_control(v))
                .collect();
            for (axis, c) in space.axes().zip(controls) {
                assert!(c >= axis.min - 1e-9 && c <= axis.max + 1e-9, "{} = {c}", axis.name);
            }
        }
    }
}
