//! Built-in demo patch
//!
//! Stands in for a compiled DSP module: it owns the value slots and
//! declares its parameters the way generated code would.

use std::sync::Arc;

use anyhow::Result;
use tiltmap::{ParameterRegistry, Slot};

/// Slots of a small subtractive synth voice
pub struct DemoPatch {
    freq: Arc<Slot>,
    cutoff: Arc<Slot>,
    resonance: Arc<Slot>,
    gain: Arc<Slot>,
    gate: Arc<Slot>,
    level: Arc<Slot>,
}

impl DemoPatch {
    /// Allocate the slots at their init values
    pub fn new() -> Self {
        Self {
            freq: Slot::shared(440.0),
            cutoff: Slot::shared(2000.0),
            resonance: Slot::shared(0.2),
            gain: Slot::shared(0.5),
            gate: Slot::shared(0.0),
            level: Slot::shared(-60.0),
        }
    }

    /// Declare every parameter into `registry`
    pub fn build(&self, registry: &mut ParameterRegistry) -> Result<()> {
        registry.declare_metadata(&self.freq, "scale", "log");
        registry.declare_metadata(&self.freq, "unit", "Hz");
        registry.declare_metadata(&self.freq, "acc", "0 0 -10 0 10");
        registry.add_slider("/synth/freq", Arc::clone(&self.freq), 440.0, 20.0, 20000.0, 1.0)?;

        registry.declare_metadata(&self.cutoff, "scale", "exp");
        registry.declare_metadata(&self.cutoff, "unit", "Hz");
        registry.add_slider("/synth/filter/cutoff", Arc::clone(&self.cutoff), 2000.0, 50.0, 12000.0, 1.0)?;

        registry.declare_metadata(&self.resonance, "acc", "1 2 -10 0 10");
        registry.add_slider("/synth/filter/resonance", Arc::clone(&self.resonance), 0.2, 0.0, 0.95, 0.01)?;

        registry.add_num_entry("/synth/gain", Arc::clone(&self.gain), 0.5, 0.0, 1.0, 0.01)?;

        registry.add_button("/synth/gate", Arc::clone(&self.gate))?;

        registry.declare_metadata(&self.level, "unit", "dB");
        registry.add_bargraph("/synth/level", Arc::clone(&self.level), -60.0, 0.0)?;

        Ok(())
    }
}

impl Default for DemoPatch {
    fn default() -> Self {
        Self::new()
    }
}
