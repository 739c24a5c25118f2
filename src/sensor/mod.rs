//! Motion-sensor mapping
//!
//! Accelerometer axes drive parameter slots through three-point curves.

mod axis;
mod curve;
mod zone;

pub use axis::Axis;
pub use curve::{Anchors, Curve};
pub use zone::ZoneControl;
