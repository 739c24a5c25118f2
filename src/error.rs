//! Error types for the registry and its mapping subsystems

use thiserror::Error;

/// Errors surfaced by converters, zone controls and the registry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// An "acc" metadata string could not be understood
    #[error("malformed acc metadata '{value}': {reason}")]
    MalformedMetadata { value: String, reason: String },

    /// Logarithmic scaling needs a strictly positive range
    #[error("logarithmic scale needs min > 0 and max > 0 (got {min}..{max})")]
    DegenerateConverterDomain { min: f64, max: f64 },

    /// Axis id outside [0, 3) (and not the -1 "none" sentinel)
    #[error("invalid axis {0}")]
    InvalidAxis(i32),

    /// Curve id outside [0, 4)
    #[error("invalid curve {0}")]
    InvalidCurve(i32),

    /// Axis anchors must satisfy amin < amax and amin <= amid <= amax
    #[error("anchors out of order: amin={amin} amid={amid} amax={amax}")]
    MalformedAnchors { amin: f64, amid: f64, amax: f64 },
}

/// Result alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
