//! Value conversion between normalized control ratios and parameter ranges
//!
//! Every parameter gets one converter, chosen by its "scale" metadata.

mod converter;
mod exponential;
mod interpolator;
mod linear;
mod logarithmic;

pub use converter::{Scale, ValueConverter};
pub use exponential::ExpConverter;
pub use interpolator::{Interpolator, Interpolator3pt};
pub use linear::LinearConverter;
pub use logarithmic::LogConverter;
