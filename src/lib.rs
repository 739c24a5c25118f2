//! tiltmap - Parameter registry with motion-sensor mapping
//!
//! Exposes a signal-processing module's parameters to control surfaces by
//! index and path, converts between normalized ratios and engineering
//! ranges, and lets accelerometer axes drive parameters through
//! three-point curves.

pub mod config;
pub mod error;
pub mod mapping;
pub mod registry;
pub mod sensor;
pub mod slot;
pub mod surface;

pub use config::TiltConfig;
pub use error::RegistryError;
pub use registry::ParameterRegistry;
pub use sensor::{Axis, Curve};
pub use slot::Slot;
