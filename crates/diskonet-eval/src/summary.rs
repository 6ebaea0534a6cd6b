//! Value ranges and colour-scale helpers for rendered fields.

/// Upper bound on [`FieldRange::decade_ticks`] output.
pub const MAX_DECADE_TICKS: usize = 64;

/// Finite minimum and maximum of a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldRange {
    /// Smallest finite value.
    pub vmin: f64,
    /// Largest finite value.
    pub vmax: f64,
}

impl FieldRange {
    /// Range of the finite values, or `None` if there are none.
    pub fn of<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<Self> {
        values
            .into_iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Self { vmin: v, vmax: v }),
                Some(r) => Some(Self {
                    vmin: r.vmin.min(v),
                    vmax: r.vmax.max(v),
                }),
            })
    }

    /// `vmax - vmin`.
    pub fn span(&self) -> f64 {
        self.vmax - self.vmin
    }

    /// Map `v` onto `[0, 1]` over this range. `None` for a constant field.
    pub fn normalize(&self, v: f64) -> Option<f64> {
        let span = self.span();
        if span > 0.0 {
            Some((v - self.vmin) / span)
        } else {
            None
        }
    }

    /// Where zero falls on the normalized scale, clamped to `[0, 1]`.
    ///
    /// This is the white point of a diverging blue-white-red colour map.
    /// `None` for a constant field.
    pub fn diverging_midpoint(&self) -> Option<f64> {
        self.normalize(0.0).map(|m| m.clamp(0.0, 1.0))
    }

    /// Integer ticks from `ceil(vmin)` strictly below `ceil(vmax)`: one
    /// tick per decade for a log10 field.
    ///
    /// At most [`MAX_DECADE_TICKS`] ticks are returned; wider ranges use
    /// a whole-number stride. Empty when the range has no integer in it.
    pub fn decade_ticks(&self) -> Vec<f64> {
        let start = self.vmin.ceil();
        let stop = self.vmax.ceil();
        let span = stop - start;
        if !span.is_finite() || span <= 0.0 {
            return Vec::new();
        }
        let stride = (span / MAX_DECADE_TICKS as f64).ceil().max(1.0);
        let count = (span / stride).ceil() as usize;
        let mut ticks: Vec<f64> = (0..count)
            .map(|i| start + stride * i as f64)
            .filter(|&t| t < stop)
            .collect();
        // Strides below the f64 spacing at large magnitudes round together.
        ticks.dedup();
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_skips_non_finite_values() {
        let v = [3.0, f64::NAN, -1.5, f64::INFINITY, 2.0];
        let r = FieldRange::of(&v).unwrap();
        assert_eq!(r, FieldRange { vmin: -1.5, vmax: 3.0 });
        assert_eq!(r.span(), 4.5);
    }

    #[test]
    fn no_finite_values_gives_none() {
        assert_eq!(FieldRange::of(&[f64::NAN]), None);
        assert_eq!(FieldRange::of(&[] as &[f64]), None);
    }

    #[test]
    fn midpoint_marks_zero() {
        let r = FieldRange { vmin: -1.0, vmax: 3.0 };
        assert_eq!(r.diverging_midpoint(), Some(0.25));
        assert_eq!(r.normalize(3.0), Some(1.0));

        let positive = FieldRange { vmin: 1.0, vmax: 2.0 };
        assert_eq!(positive.diverging_midpoint(), Some(0.0));

        let flat = FieldRange { vmin: 2.0, vmax: 2.0 };
        assert_eq!(flat.diverging_midpoint(), None);
    }

    #[test]
    fn decade_ticks_cover_the_log_range() {
        let r = FieldRange { vmin: -2.3, vmax: 1.2 };
        assert_eq!(r.decade_ticks(), vec![-2.0, -1.0, 0.0, 1.0]);

        let narrow = FieldRange { vmin: 0.1, vmax: 0.9 };
        assert!(narrow.decade_ticks().is_empty());
    }

    #[test]
    fn decade_ticks_are_bounded_for_wide_ranges() {
        let wide = FieldRange { vmin: 0.0, vmax: 5e7 };
        let ticks = wide.decade_ticks();
        assert!(ticks.len() <= MAX_DECADE_TICKS);
        assert_eq!(ticks[0], 0.0);
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
        assert!(ticks.iter().all(|&t| t < 5e7));
    }

    #[test]
    fn decade_ticks_terminate_beyond_integer_precision() {
        let far = FieldRange { vmin: 1e16, vmax: 1e16 + 100.0 };
        let ticks = far.decade_ticks();
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= MAX_DECADE_TICKS);
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));

        let huge = FieldRange { vmin: -f64::MAX, vmax: f64::MAX };
        assert!(huge.decade_ticks().is_empty());
    }
}
