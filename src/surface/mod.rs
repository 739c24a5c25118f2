//! External control surfaces driving the registry

mod midi;

pub use midi::{MidiListener, MidiMessage, MidiRouter};
