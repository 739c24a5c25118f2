//! Logarithmic value converter
//!
//! Useful for frequency and gain parameters where perception is
//! logarithmic: equal ratio steps multiply the value by the same factor.

use super::linear::LinearConverter;
use crate::error::{RegistryError, Result};

/// Logarithmic conversion between a [0, 1] ratio and `[min, max]`
///
/// Uses the formula: value = min * exp(ratio * ln(max / min))
///
/// Both bounds must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogConverter {
    log_domain: LinearConverter,
}

impl LogConverter {
    /// Create a new logarithmic converter
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min > 0.0 && max > 0.0) {
            return Err(RegistryError::DegenerateConverterDomain { min, max });
        }
        Ok(Self {
            log_domain: LinearConverter::new(min.ln(), max.ln()),
        })
    }

    /// Ratio to engineering value
    pub fn to_engineering(&self, ratio: f64) -> f64 {
        self.log_domain.to_engineering(ratio).exp()
    }

    /// Engineering value to ratio
    pub fn to_ratio(&self, value: f64) -> f64 {
        // Keep ln finite; the range clamp happens in the log domain
        self.log_domain.to_ratio(value.max(f64::MIN_POSITIVE).ln())
    }
}
