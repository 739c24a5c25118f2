//! Scale selection and the converter variant used by the registry

use super::{ExpConverter, LinearConverter, LogConverter};
use crate::error::Result;

/// Response curve requested through "scale" metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    /// Linear (default)
    #[default]
    Linear,
    /// Logarithmic, positive ranges only
    Logarithmic,
    /// Convex exponential
    Exponential,
}

impl Scale {
    /// Parse a "scale" metadata value
    ///
    /// Anything other than "log" or "exp" selects linear.
    pub fn from_metadata(value: &str) -> Self {
        match value.trim() {
            "log" => Self::Logarithmic,
            "exp" => Self::Exponential,
            _ => Self::Linear,
        }
    }

    /// Metadata spelling of this scale
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "lin",
            Self::Logarithmic => "log",
            Self::Exponential => "exp",
        }
    }
}

/// Bidirectional ratio <-> engineering value conversion for one parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueConverter {
    Linear(LinearConverter),
    Logarithmic(LogConverter),
    Exponential(ExpConverter),
}

impl ValueConverter {
    /// Build the converter for `scale` over `[min, max]`
    pub fn new(scale: Scale, min: f64, max: f64) -> Result<Self> {
        Ok(match scale {
            Scale::Linear => Self::Linear(LinearConverter::new(min, max)),
            Scale::Logarithmic => Self::Logarithmic(LogConverter::new(min, max)?),
            Scale::Exponential => Self::Exponential(ExpConverter::new(min, max)),
        })
    }

    /// The scale this converter implements
    pub fn scale(&self) -> Scale {
        match self {
            Self::Linear(_) => Scale::Linear,
            Self::Logarithmic(_) => Scale::Logarithmic,
            Self::Exponential(_) => Scale::Exponential,
        }
    }

    /// Ratio in [0, 1] to engineering value
    pub fn to_engineering(&self, ratio: f64) -> f64 {
        match self {
            Self::Linear(c) => c.to_engineering(ratio),
            Self::Logarithmic(c) => c.to_engineering(ratio),
            Self::Exponential(c) => c.to_engineering(ratio),
        }
    }

    /// Engineering value to ratio in [0, 1]
    pub fn to_ratio(&self, value: f64) -> f64 {
        match self {
            Self::Linear(c) => c.to_ratio(value),
            Self::Logarithmic(c) => c.to_ratio(value),
            Self::Exponential(c) => c.to_ratio(value),
        }
    }
}
