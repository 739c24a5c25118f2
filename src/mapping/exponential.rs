//! Exponential value converter
//!
//! A convex response anchored at both ends of the range: fine control at
//! the low end of the fader, coarse control near the top.
//!
//! Use cases:
//! - Volume faders (physical position -> perceived loudness)
//! - Ranges that include zero or negative values, where a logarithmic
//!   scale cannot be used

/// Exponential conversion between a [0, 1] ratio and `[min, max]`
///
/// Uses the formula for ratio r in [0, 1]:
///   value = min + (max - min) * (exp(k*r) - 1) / (exp(k) - 1)
///
/// where k is the curve factor, derived from the range as
/// ln(|max| / |min|) (each side floored at 0.001) and never less than 1.
/// The inverse is closed-form:
///   r = ln(1 + s * (exp(k) - 1)) / k,  s = (value - min) / (max - min)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpConverter {
    min: f64,
    max: f64,
    curve_factor: f64,
}

impl ExpConverter {
    /// Create a new exponential converter
    pub fn new(min: f64, max: f64) -> Self {
        let min_safe = min.abs().max(0.001);
        let max_safe = max.abs().max(0.001);
        let curve_factor = (max_safe / min_safe).ln().max(1.0);

        Self {
            min,
            max,
            curve_factor,
        }
    }

    /// Curve steepness in use
    pub fn curve_factor(&self) -> f64 {
        self.curve_factor
    }

    /// Ratio to engineering value
    pub fn to_engineering(&self, ratio: f64) -> f64 {
        let r = ratio.clamp(0.0, 1.0);
        let k = self.curve_factor;
        let scaled = (k * r).exp_m1() / k.exp_m1();
        self.min + (self.max - self.min) * scaled
    }

    /// Engineering value to ratio
    pub fn to_ratio(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        let scaled = if range == 0.0 {
            0.5
        } else {
            ((value - self.min) / range).clamp(0.0, 1.0)
        };
        let k = self.curve_factor;
        (scaled * k.exp_m1()).ln_1p() / k
    }
}
