//! Externally owned parameter value cells
//!
//! The host allocates one slot per parameter and reads it from its render
//! path; control surfaces and sensor callbacks write it from other threads.
//! Stores are relaxed atomics: last writer wins, values never tear.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// A single f32 value shared between the host and the registry
#[derive(Debug, Default)]
pub struct Slot {
    bits: AtomicU32,
}

impl Slot {
    /// Create a slot holding `value`
    pub fn new(value: f32) -> Self {
        Self {
            bits: AtomicU32::new(value.to_bits()),
        }
    }

    /// Create a shared slot holding `value`
    pub fn shared(value: f32) -> Arc<Self> {
        Arc::new(Self::new(value))
    }

    /// Read the current value
    pub fn load(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Overwrite the current value
    pub fn store(&self, value: f32) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }
}
