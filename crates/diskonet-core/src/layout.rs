//! Staggered sample layouts for the three disk quantities.

use crate::error::GridError;
use std::fmt;
use std::str::FromStr;

/// Where along one axis a quantity is sampled within each cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisPlacement {
    /// The lower-bound node of the cell.
    Edge,
    /// The midpoint of the two nodes bounding the cell.
    Middle,
}

/// Which staggered positions a physical quantity is sampled at.
///
/// The scalar (surface density) lives at cell centres; each velocity
/// component lives on the cell face normal to its own direction.
///
/// | Layout | radial | azimuthal |
/// |--------|--------|-----------|
/// | [`Scalar`](Self::Scalar) | middle | middle |
/// | [`RadialVelocity`](Self::RadialVelocity) | edge | middle |
/// | [`AzimuthalVelocity`](Self::AzimuthalVelocity) | middle | edge |
///
/// # Examples
///
/// ```
/// use diskonet_core::{AxisPlacement, QuantityLayout};
///
/// let layout: QuantityLayout = "v_r".parse().unwrap();
/// assert_eq!(layout, QuantityLayout::RadialVelocity);
/// assert_eq!(layout.radial_placement(), AxisPlacement::Edge);
/// assert_eq!(layout.azimuthal_placement(), AxisPlacement::Middle);
/// assert!("pressure".parse::<QuantityLayout>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuantityLayout {
    /// Cell-centred scalar field (`sigma`).
    Scalar,
    /// Radial velocity on radial faces (`v_r`).
    RadialVelocity,
    /// Azimuthal velocity on azimuthal faces (`v_theta`).
    AzimuthalVelocity,
}

impl QuantityLayout {
    /// Every layout, in registry order.
    pub const ALL: [QuantityLayout; 3] = [
        Self::Scalar,
        Self::RadialVelocity,
        Self::AzimuthalVelocity,
    ];

    /// The run-configuration key for this quantity.
    pub fn name(self) -> &'static str {
        match self {
            Self::Scalar => "sigma",
            Self::RadialVelocity => "v_r",
            Self::AzimuthalVelocity => "v_theta",
        }
    }

    /// Dense index in `0..3`, matching the position in [`ALL`](Self::ALL).
    pub fn index(self) -> usize {
        match self {
            Self::Scalar => 0,
            Self::RadialVelocity => 1,
            Self::AzimuthalVelocity => 2,
        }
    }

    /// Placement of samples along the radial axis.
    pub fn radial_placement(self) -> AxisPlacement {
        match self {
            Self::RadialVelocity => AxisPlacement::Edge,
            Self::Scalar | Self::AzimuthalVelocity => AxisPlacement::Middle,
        }
    }

    /// Placement of samples along the azimuthal axis.
    pub fn azimuthal_placement(self) -> AxisPlacement {
        match self {
            Self::AzimuthalVelocity => AxisPlacement::Edge,
            Self::Scalar | Self::RadialVelocity => AxisPlacement::Middle,
        }
    }
}

impl fmt::Display for QuantityLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantityLayout {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sigma" | "scalar" => Ok(Self::Scalar),
            "v_r" | "radial_velocity" => Ok(Self::RadialVelocity),
            "v_theta" | "azimuthal_velocity" => Ok(Self::AzimuthalVelocity),
            other => Err(GridError::UnknownLayout {
                name: other.to_string(),
            }),
        }
    }
}
