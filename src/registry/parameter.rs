//! Parameter records

use std::sync::Arc;

use crate::mapping::{Scale, ValueConverter};
use crate::slot::Slot;

/// One registered parameter
///
/// Everything but the slot contents is fixed at registration.
#[derive(Debug)]
pub struct Parameter {
    name: String,
    slot: Arc<Slot>,
    init: f32,
    min: f32,
    max: f32,
    step: f32,
    unit: String,
    converter: ValueConverter,
}

impl Parameter {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: String,
        slot: Arc<Slot>,
        init: f32,
        min: f32,
        max: f32,
        step: f32,
        unit: String,
        converter: ValueConverter,
    ) -> Self {
        Self {
            name,
            slot,
            init,
            min,
            max,
            step,
            unit,
            converter,
        }
    }

    /// Path-qualified name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slot(&self) -> &Arc<Slot> {
        &self.slot
    }

    pub fn init(&self) -> f32 {
        self.init
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Unit from "unit" metadata, empty if none was declared
    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn scale(&self) -> Scale {
        self.converter.scale()
    }

    pub(crate) fn converter(&self) -> &ValueConverter {
        &self.converter
    }

    /// Current slot value
    pub fn value(&self) -> f32 {
        self.slot.load()
    }

    /// Current slot value expressed as a ratio
    pub fn ratio(&self) -> f32 {
        self.converter.to_ratio(self.value() as f64) as f32
    }
}
