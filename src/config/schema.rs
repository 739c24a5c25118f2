//! Configuration schema definitions

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::sensor::{Axis, Curve};

/// Main configuration for tiltmap
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TiltConfig {
    /// Accelerometer mappings applied after the build phase
    #[serde(default)]
    pub sensors: Vec<SensorMappingConfig>,

    /// MIDI control surface
    #[serde(default)]
    pub midi: MidiConfig,
}

impl TiltConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for mapping in &self.sensors {
            if mapping.param.is_empty() {
                bail!("Sensor mapping is missing a parameter path");
            }
            let ordered = mapping.amin < mapping.amax
                && mapping.amin <= mapping.amid
                && mapping.amid <= mapping.amax;
            if mapping.axis.is_some() && !ordered {
                bail!(
                    "Sensor mapping for '{}' needs amin < amax and amin <= amid <= amax",
                    mapping.param
                );
            }
        }

        if let Some(channel) = self.midi.channel {
            if channel > 15 {
                bail!("MIDI channel must be between 0 and 15");
            }
        }

        let mut seen = HashSet::new();
        for binding in &self.midi.bindings {
            if binding.cc > 127 {
                bail!("MIDI CC number must be between 0 and 127 (got {})", binding.cc);
            }
            if !seen.insert(binding.cc) {
                bail!("MIDI CC {} is bound more than once", binding.cc);
            }
        }

        Ok(())
    }
}

/// One accelerometer-to-parameter mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorMappingConfig {
    /// Parameter path, e.g. "/synth/cutoff"
    pub param: String,

    /// Axis driving the parameter (None = unmapped)
    pub axis: Option<Axis>,

    /// Response curve (default: up)
    #[serde(default)]
    pub curve: Curve,

    /// Axis reading mapped to the parameter minimum (default: -1)
    #[serde(default = "default_amin")]
    pub amin: f64,

    /// Axis reading mapped to the parameter init value (default: 0)
    #[serde(default)]
    pub amid: f64,

    /// Axis reading mapped to the parameter maximum (default: 1)
    #[serde(default = "default_amax")]
    pub amax: f64,
}

fn default_amin() -> f64 { -1.0 }
fn default_amax() -> f64 { 1.0 }

/// MIDI input settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MidiConfig {
    /// Input port name, or a substring of it (None = first port)
    pub port: Option<String>,

    /// Channel filter 0-15 (None = all channels)
    pub channel: Option<u8>,

    /// Controller-to-parameter bindings
    #[serde(default)]
    pub bindings: Vec<MidiBinding>,
}

/// Routes one MIDI controller to one parameter's ratio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MidiBinding {
    /// Controller number 0-127
    pub cc: u8,

    /// Parameter path
    pub param: String,
}
