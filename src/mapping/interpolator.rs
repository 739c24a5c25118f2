//! Clamped linear interpolators
//!
//! The building blocks shared by the value converters and the sensor
//! curves: a single clamped segment, and a two-segment variant anchored
//! at three points.

/// Maps `[lo, hi]` linearly onto `[v1, v2]`, clamping the input first
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolator {
    lo: f64,
    hi: f64,
    coef: f64,
    offset: f64,
}

impl Interpolator {
    /// Create a new interpolator
    ///
    /// A zero-width input range maps everything to the midpoint of the
    /// output range.
    pub fn new(lo: f64, hi: f64, v1: f64, v2: f64) -> Self {
        if hi != lo {
            let coef = (v2 - v1) / (hi - lo);
            Self {
                lo,
                hi,
                coef,
                offset: v1 - lo * coef,
            }
        } else {
            Self {
                lo,
                hi,
                coef: 0.0,
                offset: (v1 + v2) / 2.0,
            }
        }
    }

    /// Interpolate a value
    pub fn map(&self, input: f64) -> f64 {
        let x = input.clamp(self.lo.min(self.hi), self.lo.max(self.hi));
        self.offset + x * self.coef
    }
}

/// Two clamped segments joined at a middle anchor
///
/// Inputs below `mid` use `[lo, mid] -> [v1, v2]`, everything else uses
/// `[mid, hi] -> [v2, v3]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolator3pt {
    mid: f64,
    lower: Interpolator,
    upper: Interpolator,
}

impl Interpolator3pt {
    /// Create a new three-point interpolator
    pub fn new(lo: f64, mid: f64, hi: f64, v1: f64, v2: f64, v3: f64) -> Self {
        Self {
            mid,
            lower: Interpolator::new(lo, mid, v1, v2),
            upper: Interpolator::new(mid, hi, v2, v3),
        }
    }

    /// Interpolate a value
    pub fn map(&self, input: f64) -> f64 {
        if input < self.mid {
            self.lower.map(input)
        } else {
            self.upper.map(input)
        }
    }
}
