//! Linear value converter

use super::interpolator::Interpolator;

/// Linear conversion between a [0, 1] ratio and `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearConverter {
    to_value: Interpolator,
    to_ratio: Interpolator,
}

impl LinearConverter {
    /// Create a new linear converter
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            to_value: Interpolator::new(0.0, 1.0, min, max),
            to_ratio: Interpolator::new(min, max, 0.0, 1.0),
        }
    }

    /// Ratio to engineering value
    pub fn to_engineering(&self, ratio: f64) -> f64 {
        self.to_value.map(ratio)
    }

    /// Engineering value to ratio
    pub fn to_ratio(&self, value: f64) -> f64 {
        self.to_ratio.map(value)
    }
}
