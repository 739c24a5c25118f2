//! Sensor response curves
//!
//! Each curve places the parameter's min/init/max on the three axis
//! anchors in a different order.

use crate::error::{RegistryError, Result};
use crate::mapping::Interpolator3pt;
use serde::{Deserialize, Serialize};

/// Shape of an axis-to-parameter mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    /// amin -> min, amid -> init, amax -> max
    #[default]
    Up,
    /// amin -> max, amid -> init, amax -> min
    Down,
    /// Folded: min at both ends, max at amid
    UpDown,
    /// Folded: max at both ends, min at amid
    DownUp,
}

impl Curve {
    /// All curves in id order
    pub const ALL: [Curve; 4] = [Curve::Up, Curve::Down, Curve::UpDown, Curve::DownUp];

    /// Numeric id used in "acc" metadata
    pub fn id(self) -> i32 {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::UpDown => 2,
            Self::DownUp => 3,
        }
    }

    /// Decode a numeric curve id in [0, 4)
    pub fn from_id(id: i32) -> Result<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(RegistryError::InvalidCurve(id))
    }

    /// Build the interpolator for this curve
    pub(crate) fn interpolator(self, anchors: Anchors, min: f64, init: f64, max: f64) -> Interpolator3pt {
        let (v1, v2, v3) = match self {
            Self::Up => (min, init, max),
            Self::Down => (max, init, min),
            Self::UpDown => (min, max, min),
            Self::DownUp => (max, min, max),
        };
        Interpolator3pt::new(anchors.amin, anchors.amid, anchors.amax, v1, v2, v3)
    }
}

impl std::fmt::Display for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::UpDown => "up_down",
            Self::DownUp => "down_up",
        };
        f.pad(name)
    }
}

/// Axis readings at which the curve reaches its three parameter anchors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub amin: f64,
    pub amid: f64,
    pub amax: f64,
}

impl Anchors {
    /// Validate and build anchors
    ///
    /// Requires amin < amax and amin <= amid <= amax.
    pub fn new(amin: f64, amid: f64, amax: f64) -> Result<Self> {
        // Written so that NaN fails every comparison
        if amin < amax && amin <= amid && amid <= amax {
            Ok(Self { amin, amid, amax })
        } else {
            Err(RegistryError::MalformedAnchors { amin, amid, amax })
        }
    }
}
