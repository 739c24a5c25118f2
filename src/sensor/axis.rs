//! Motion sensor axes

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};

/// One of the three accelerometer channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in index order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in per-axis tables
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Axis for a table position, if in [0, 3)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Decode the integer form used by control clients
    ///
    /// -1 means "no axis"; other values outside [0, 3) are rejected.
    pub fn from_raw(raw: i32) -> Result<Option<Self>> {
        match raw {
            -1 => Ok(None),
            0..=2 => Ok(Self::from_index(raw as usize)),
            _ => Err(RegistryError::InvalidAxis(raw)),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.pad(name)
    }
}
