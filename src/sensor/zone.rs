//! Curve-driven binding from one sensor axis to one parameter slot

use std::sync::Arc;

use log::trace;

use super::curve::{Anchors, Curve};
use crate::mapping::Interpolator3pt;
use crate::slot::Slot;

/// Writes interpolated sensor readings straight into a parameter slot
#[derive(Debug)]
pub struct ZoneControl {
    slot: Arc<Slot>,
    curve: Curve,
    anchors: Anchors,
    interp: Interpolator3pt,
    active: bool,
}

impl ZoneControl {
    /// Create an active control mapping `anchors` onto `min`/`init`/`max`
    pub fn new(slot: Arc<Slot>, curve: Curve, anchors: Anchors, min: f64, init: f64, max: f64) -> Self {
        Self {
            slot,
            curve,
            anchors,
            interp: curve.interpolator(anchors, min, init, max),
            active: true,
        }
    }

    /// Feed one raw axis reading
    ///
    /// NaN readings are dropped and leave the slot untouched.
    pub fn update(&self, raw: f64) {
        if !self.active {
            return;
        }
        if raw.is_nan() {
            trace!("dropping NaN sensor reading");
            return;
        }
        self.slot.store(self.interp.map(raw) as f32);
    }

    /// Replace the curve and its anchors, keeping the activation state
    pub fn reconfigure(&mut self, curve: Curve, anchors: Anchors, min: f64, init: f64, max: f64) {
        self.curve = curve;
        self.anchors = anchors;
        self.interp = curve.interpolator(anchors, min, init, max);
    }

    /// Enable or disable writes from `update`
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn anchors(&self) -> Anchors {
        self.anchors
    }

    /// The slot this control writes to
    pub fn slot(&self) -> &Arc<Slot> {
        &self.slot
    }

    /// Whether this control writes to `slot`
    pub fn is_bound_to(&self, slot: &Arc<Slot>) -> bool {
        Arc::ptr_eq(&self.slot, slot)
    }
}
