//! Logical polar domain and the run-configuration block it is read from.

use diskonet_core::GridError;
use serde::{Deserialize, Deserializer, Serialize};
use std::f64::consts::PI;

/// Immutable description of a polar mesh: radial and azimuthal bounds
/// plus the number of cells along each axis.
///
/// Construction validates eagerly, so a `DomainSpec` that exists is
/// always usable.
///
/// # Examples
///
/// ```
/// use diskonet_grid::DomainSpec;
///
/// let d = DomainSpec::full_azimuth(0.4, 2.5, 128, 384).unwrap();
/// assert_eq!(d.shape(), (128, 384));
/// assert!(DomainSpec::new(1.0, 1.0, 0.0, 1.0, 4, 4).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainSpec {
    r_min: f64,
    r_max: f64,
    theta_min: f64,
    theta_max: f64,
    n_r: usize,
    n_theta: usize,
}

impl DomainSpec {
    /// Create a domain, rejecting degenerate, inverted, or non-finite
    /// bounds, cell counts below one, and cell widths too narrow for
    /// adjacent nodes to stay distinct in `f64`.
    pub fn new(
        r_min: f64,
        r_max: f64,
        theta_min: f64,
        theta_max: f64,
        n_r: usize,
        n_theta: usize,
    ) -> Result<Self, GridError> {
        check_bounds("r", r_min, r_max)?;
        check_bounds("theta", theta_min, theta_max)?;
        check_count("n_r", n_r)?;
        check_count("n_theta", n_theta)?;
        if n_r.checked_mul(n_theta).is_none() {
            return Err(GridError::InvalidDomain {
                reason: format!("{n_r} x {n_theta} cells overflows usize"),
            });
        }
        check_resolution("r", r_min, r_max, n_r)?;
        check_resolution("theta", theta_min, theta_max, n_theta)?;
        Ok(Self {
            r_min,
            r_max,
            theta_min,
            theta_max,
            n_r,
            n_theta,
        })
    }

    /// A domain spanning the full azimuth `[-π, π]`.
    pub fn full_azimuth(
        r_min: f64,
        r_max: f64,
        n_r: usize,
        n_theta: usize,
    ) -> Result<Self, GridError> {
        Self::new(r_min, r_max, -PI, PI, n_r, n_theta)
    }

    /// Inner radius.
    pub fn r_min(&self) -> f64 {
        self.r_min
    }

    /// Outer radius.
    pub fn r_max(&self) -> f64 {
        self.r_max
    }

    /// Lower azimuth.
    pub fn theta_min(&self) -> f64 {
        self.theta_min
    }

    /// Upper azimuth.
    pub fn theta_max(&self) -> f64 {
        self.theta_max
    }

    /// Number of radial cells.
    pub fn n_r(&self) -> usize {
        self.n_r
    }

    /// Number of azimuthal cells.
    pub fn n_theta(&self) -> usize {
        self.n_theta
    }

    /// `(n_r, n_theta)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_r, self.n_theta)
    }

    /// Total number of cells, `n_r * n_theta`.
    pub fn cell_count(&self) -> usize {
        self.n_r * self.n_theta
    }

    /// Uniform radial cell width.
    pub fn cell_width_r(&self) -> f64 {
        (self.r_max - self.r_min) / self.n_r as f64
    }

    /// Uniform azimuthal cell width.
    pub fn cell_width_theta(&self) -> f64 {
        (self.theta_max - self.theta_min) / self.n_theta as f64
    }
}

fn check_bounds(axis: &str, lo: f64, hi: f64) -> Result<(), GridError> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(GridError::InvalidDomain {
            reason: format!("{axis} bounds must be finite, got [{lo}, {hi}]"),
        });
    }
    if lo >= hi {
        return Err(GridError::InvalidDomain {
            reason: format!("{axis}_min ({lo}) must be less than {axis}_max ({hi})"),
        });
    }
    if !(hi - lo).is_finite() || !(hi + lo).is_finite() {
        return Err(GridError::InvalidDomain {
            reason: format!("{axis} bounds [{lo}, {hi}] overflow f64 arithmetic"),
        });
    }
    Ok(())
}

/// Reject cell widths too small to separate adjacent nodes at the
/// magnitude of the bounds.
///
/// Each computed node `lo + step * i` is within about `1.5 * EPSILON * m`
/// of its exact value (`m` the larger bound magnitude). A step above
/// `8 * EPSILON * m` keeps nodes strictly increasing and leaves room for
/// a midpoint strictly between them.
fn check_resolution(axis: &str, lo: f64, hi: f64, n: usize) -> Result<(), GridError> {
    let step = (hi - lo) / n as f64;
    let magnitude = lo.abs().max(hi.abs());
    if step <= 8.0 * f64::EPSILON * magnitude || lo + step == lo {
        return Err(GridError::InvalidDomain {
            reason: format!(
                "{axis} cell width {step:e} cannot be resolved at magnitude {magnitude:e}"
            ),
        });
    }
    Ok(())
}

fn check_count(name: &str, n: usize) -> Result<(), GridError> {
    if n == 0 {
        return Err(GridError::InvalidDomain {
            reason: format!("{name} must be at least 1"),
        });
    }
    Ok(())
}

// ── DiskSetup ──────────────────────────────────────────────────────

/// The mesh block of a training run's configuration.
///
/// Keys follow the hydro code's naming: `y` is radius and `x` is azimuth.
/// Values may arrive as numbers or as numeric strings. Counts are signed
/// here because that is how they are written on disk; [`domain`](Self::domain)
/// rejects anything below one.
///
/// # Examples
///
/// ```
/// use diskonet_grid::DiskSetup;
///
/// let setup: DiskSetup =
///     serde_json::from_str(r#"{"ymin": "0.4", "ymax": 2.5, "ny": 128, "nx": "384"}"#).unwrap();
/// let domain = setup.domain().unwrap();
/// assert_eq!(domain.shape(), (128, 384));
/// assert_eq!(domain.theta_min(), -std::f64::consts::PI);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiskSetup {
    /// Inner radius.
    #[serde(deserialize_with = "loose_f64")]
    pub ymin: f64,
    /// Outer radius.
    #[serde(deserialize_with = "loose_f64")]
    pub ymax: f64,
    /// Lower azimuth. Default: `-π`.
    #[serde(default = "default_xmin", deserialize_with = "loose_f64")]
    pub xmin: f64,
    /// Upper azimuth. Default: `π`.
    #[serde(default = "default_xmax", deserialize_with = "loose_f64")]
    pub xmax: f64,
    /// Radial cell count.
    #[serde(deserialize_with = "loose_i64")]
    pub ny: i64,
    /// Azimuthal cell count.
    #[serde(deserialize_with = "loose_i64")]
    pub nx: i64,
}

impl DiskSetup {
    /// Override the resolution, keeping the bounds.
    pub fn with_resolution(mut self, n_r: i64, n_theta: i64) -> Self {
        self.ny = n_r;
        self.nx = n_theta;
        self
    }

    /// Override the radial bounds, keeping the resolution.
    pub fn with_radius(mut self, r_min: f64, r_max: f64) -> Self {
        self.ymin = r_min;
        self.ymax = r_max;
        self
    }

    /// Validate and convert to a [`DomainSpec`].
    pub fn domain(&self) -> Result<DomainSpec, GridError> {
        let n_r = signed_count("n_r", self.ny)?;
        let n_theta = signed_count("n_theta", self.nx)?;
        DomainSpec::new(self.ymin, self.ymax, self.xmin, self.xmax, n_r, n_theta)
    }
}

fn signed_count(name: &str, n: i64) -> Result<usize, GridError> {
    if n < 1 {
        return Err(GridError::InvalidDomain {
            reason: format!("{name} must be at least 1, got {n}"),
        });
    }
    usize::try_from(n).map_err(|_| GridError::InvalidDomain {
        reason: format!("{name} = {n} does not fit in usize"),
    })
}

fn default_xmin() -> f64 {
    -PI
}

fn default_xmax() -> f64 {
    PI
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Value(T),
    Text(String),
}

fn loose_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    match Loose::<f64>::deserialize(d)? {
        Loose::Value(v) => Ok(v),
        Loose::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn loose_i64<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    match Loose::<i64>::deserialize(d)? {
        Loose::Value(v) => Ok(v),
        Loose::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
