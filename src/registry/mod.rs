//! Index-addressable parameter registry
//!
//! The host declares its parameters once, in order; each gets a stable
//! index and a path-qualified name. Control surfaces then read and write
//! slots by index (raw or through the parameter's converter), and sensor
//! callbacks push axis readings through [`ParameterRegistry::propagate`].
//!
//! Runtime accessors take `&self` and write slots with relaxed atomic
//! stores. [`ParameterRegistry::remap_axis`] takes `&mut self`: when the
//! registry is shared between a sensor thread and a control thread, wrap
//! it in a `RwLock` so remapping excludes propagation.

mod metadata;
mod parameter;

pub use metadata::{AccMetadata, PendingMetadata};
pub use parameter::Parameter;

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use crate::error::Result;
use crate::mapping::ValueConverter;
use crate::sensor::{Anchors, Axis, Curve, ZoneControl};
use crate::slot::Slot;

/// Central table of parameters and their sensor mappings
#[derive(Debug, Default)]
pub struct ParameterRegistry {
    params: Vec<Parameter>,
    names: HashMap<String, usize>,
    acc: [Vec<ZoneControl>; 3],
    pending: PendingMetadata,
}

impl ParameterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parameter bound to `slot`, returning its index
    ///
    /// Consumes whatever metadata was staged for `slot`: the scale picks the
    /// converter, the unit is recorded, and a valid "acc" entry creates an
    /// active sensor mapping. Staged metadata is cleared even when the
    /// registration is rejected.
    pub fn register(
        &mut self,
        path: &str,
        slot: Arc<Slot>,
        init: f32,
        min: f32,
        max: f32,
        step: f32,
    ) -> Result<usize> {
        let pending = self.pending.take_for(&slot);

        let converter = ValueConverter::new(pending.scale(), min as f64, max as f64)
            .inspect_err(|e| warn!("rejecting parameter {}: {}", path, e))?;

        if let Some(raw) = pending.acc() {
            match AccMetadata::parse(raw) {
                Ok(acc) => {
                    debug!("{} follows axis {} ({})", path, acc.axis, acc.curve);
                    self.acc[acc.axis.index()].push(ZoneControl::new(
                        Arc::clone(&slot),
                        acc.curve,
                        acc.anchors,
                        min as f64,
                        init as f64,
                        max as f64,
                    ));
                }
                Err(e) => warn!("{}; {} has no sensor mapping", e, path),
            }
        }

        let index = self.params.len();
        if let Some(previous) = self.names.insert(path.to_string(), index) {
            debug!("{} re-registered, index {} shadows {}", path, index, previous);
        }
        self.params.push(Parameter::new(
            path.to_string(),
            slot,
            init,
            min,
            max,
            step,
            pending.into_unit(),
            converter,
        ));
        debug!("registered {} as #{} [{}..{}]", path, index, min, max);

        Ok(index)
    }

    /// Stage metadata for the next registration of `slot`
    ///
    /// Recognized keys are "scale" (lin, log, exp), "unit" and "acc"
    /// (`<axis> <curve> <amin> <amid> <amax>`). Other keys are ignored.
    pub fn declare_metadata(&mut self, slot: &Arc<Slot>, key: &str, value: &str) {
        self.pending.declare(slot, key, value);
    }

    /// Push button: range 0..1, step 1
    pub fn add_button(&mut self, path: &str, slot: Arc<Slot>) -> Result<usize> {
        self.register(path, slot, 0.0, 0.0, 1.0, 1.0)
    }

    /// Toggle: range 0..1, step 1
    pub fn add_check_button(&mut self, path: &str, slot: Arc<Slot>) -> Result<usize> {
        self.register(path, slot, 0.0, 0.0, 1.0, 1.0)
    }

    pub fn add_slider(
        &mut self,
        path: &str,
        slot: Arc<Slot>,
        init: f32,
        min: f32,
        max: f32,
        step: f32,
    ) -> Result<usize> {
        self.register(path, slot, init, min, max, step)
    }

    pub fn add_num_entry(
        &mut self,
        path: &str,
        slot: Arc<Slot>,
        init: f32,
        min: f32,
        max: f32,
        step: f32,
    ) -> Result<usize> {
        self.register(path, slot, init, min, max, step)
    }

    /// Output meter: starts at `min`, a thousand steps across the range
    pub fn add_bargraph(&mut self, path: &str, slot: Arc<Slot>, min: f32, max: f32) -> Result<usize> {
        self.register(path, slot, min, min, max, (max - min) / 1000.0)
    }

    /// Number of registered parameters
    pub fn count(&self) -> usize {
        self.params.len()
    }

    /// Index of the most recent parameter registered under `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    /// All parameters in index order
    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }

    /// Parameter at `index`
    ///
    /// # Panics
    /// If `index` is not below [`count`](Self::count).
    pub fn parameter(&self, index: usize) -> &Parameter {
        match self.params.get(index) {
            Some(param) => param,
            None => panic!(
                "parameter index {} out of range (registry holds {})",
                index,
                self.params.len()
            ),
        }
    }

    pub fn name(&self, index: usize) -> &str {
        self.parameter(index).name()
    }

    pub fn unit(&self, index: usize) -> &str {
        self.parameter(index).unit()
    }

    pub fn init(&self, index: usize) -> f32 {
        self.parameter(index).init()
    }

    pub fn min(&self, index: usize) -> f32 {
        self.parameter(index).min()
    }

    pub fn max(&self, index: usize) -> f32 {
        self.parameter(index).max()
    }

    pub fn step(&self, index: usize) -> f32 {
        self.parameter(index).step()
    }

    /// Raw slot value, no conversion
    pub fn value(&self, index: usize) -> f32 {
        self.parameter(index).value()
    }

    /// Write the slot directly, no clamping
    pub fn set_value(&self, index: usize, value: f32) {
        self.parameter(index).slot().store(value);
    }

    /// Slot value as a [0, 1] ratio
    pub fn ratio(&self, index: usize) -> f32 {
        self.parameter(index).ratio()
    }

    /// Write the slot from a [0, 1] ratio
    pub fn set_ratio(&self, index: usize, ratio: f32) {
        let param = self.parameter(index);
        param
            .slot()
            .store(param.converter().to_engineering(ratio as f64) as f32);
    }

    /// Convert a value to a ratio without touching the slot
    pub fn value_to_ratio(&self, index: usize, value: f32) -> f32 {
        self.parameter(index).converter().to_ratio(value as f64) as f32
    }

    /// Convert a ratio to a value without touching the slot
    pub fn ratio_to_value(&self, index: usize, ratio: f32) -> f32 {
        self.parameter(index).converter().to_engineering(ratio as f64) as f32
    }

    /// Feed one sensor reading to every control on `axis`
    pub fn propagate(&self, axis: Axis, raw: f64) {
        for control in &self.acc[axis.index()] {
            control.update(raw);
        }
    }

    /// Controls registered on `axis`, active or not
    pub fn controls(&self, axis: Axis) -> &[ZoneControl] {
        &self.acc[axis.index()]
    }

    /// Axis and curve currently driving parameter `index`, if any
    pub fn active_mapping(&self, index: usize) -> Option<(Axis, Curve)> {
        let slot = self.parameter(index).slot();
        Axis::ALL.into_iter().find_map(|axis| {
            self.acc[axis.index()]
                .iter()
                .find(|zc| zc.is_active() && zc.is_bound_to(slot))
                .map(|zc| (axis, zc.curve()))
        })
    }

    /// Move parameter `index` onto `axis`, or unmap it with `None`
    ///
    /// Every control bound to the parameter is deactivated first, so at most
    /// one stays active afterwards. An existing control on the target axis
    /// is reconfigured and reactivated; otherwise a new one is created.
    /// Invalid anchors are rejected before anything changes.
    ///
    /// # Panics
    /// If `index` is not below [`count`](Self::count).
    pub fn remap_axis(
        &mut self,
        index: usize,
        axis: Option<Axis>,
        curve: Curve,
        amin: f64,
        amid: f64,
        amax: f64,
    ) -> Result<()> {
        let param = self.parameter(index);
        let slot = Arc::clone(param.slot());
        let (min, init, max) = (param.min() as f64, param.init() as f64, param.max() as f64);

        let target = match axis {
            Some(axis) => {
                let anchors = Anchors::new(amin, amid, amax)
                    .inspect_err(|e| warn!("cannot remap {}: {}", param.name(), e))?;
                Some((axis, anchors))
            }
            None => None,
        };

        for controls in self.acc.iter_mut() {
            for zc in controls.iter_mut().filter(|zc| zc.is_bound_to(&slot)) {
                zc.set_active(false);
            }
        }

        let Some((axis, anchors)) = target else {
            debug!("parameter #{} unmapped", index);
            return Ok(());
        };

        let controls = &mut self.acc[axis.index()];
        match controls.iter().position(|zc| zc.is_bound_to(&slot)) {
            Some(pos) => {
                let zc = &mut controls[pos];
                zc.reconfigure(curve, anchors, min, init, max);
                zc.set_active(true);
            }
            None => controls.push(ZoneControl::new(slot, curve, anchors, min, init, max)),
        }
        debug!("parameter #{} now follows axis {} ({})", index, axis, curve);

        Ok(())
    }

    /// [`remap_axis`](Self::remap_axis) with integer axis and curve ids
    ///
    /// Axis -1 unmaps. Out-of-range ids are rejected without changes.
    pub fn remap_axis_raw(
        &mut self,
        index: usize,
        axis: i32,
        curve: i32,
        amin: f64,
        amid: f64,
        amax: f64,
    ) -> Result<()> {
        let axis = Axis::from_raw(axis)?;
        let curve = Curve::from_id(curve)?;
        self.remap_axis(index, axis, curve, amin, amid, amax)
    }
}
