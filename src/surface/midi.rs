//! MIDI input for tiltmap.
//!
//! Decodes incoming MIDI messages and routes bound controllers to
//! parameter ratios.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::{anyhow, bail, Result};
use log::{info, trace, warn};
use midir::{MidiInput, MidiInputConnection};

use crate::config::MidiConfig;
use crate::registry::ParameterRegistry;

/// MIDI message types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiMessage {
    /// Note on: channel (0-15), note (0-127), velocity (1-127)
    NoteOn(u8, u8, u8),
    /// Note off: channel (0-15), note (0-127), velocity (0-127)
    NoteOff(u8, u8, u8),
    /// Control change: channel (0-15), controller (0-127), value (0-127)
    ControlChange(u8, u8, u8),
    /// Pitch bend: channel (0-15), value (0-16383, center at 8192)
    PitchBend(u8, u16),
}

impl MidiMessage {
    /// Decode raw MIDI bytes.
    ///
    /// Note on with velocity 0 is reported as note off. Unsupported or
    /// truncated messages yield `None`.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let (&status, data) = bytes.split_first()?;
        let ch = status & 0x0F;
        match (status & 0xF0, data) {
            (0x90, [note, 0, ..]) => Some(MidiMessage::NoteOff(ch, note & 0x7F, 0)),
            (0x90, [note, vel, ..]) => Some(MidiMessage::NoteOn(ch, note & 0x7F, vel & 0x7F)),
            (0x80, [note, vel, ..]) => Some(MidiMessage::NoteOff(ch, note & 0x7F, vel & 0x7F)),
            (0xB0, [ctrl, val, ..]) => Some(MidiMessage::ControlChange(ch, ctrl & 0x7F, val & 0x7F)),
            (0xE0, [lsb, msb, ..]) => {
                let value = ((*msb as u16 & 0x7F) << 7) | (*lsb as u16 & 0x7F);
                Some(MidiMessage::PitchBend(ch, value))
            }
            _ => None,
        }
    }

    /// Channel the message was sent on.
    pub fn channel(&self) -> u8 {
        match *self {
            MidiMessage::NoteOn(ch, ..)
            | MidiMessage::NoteOff(ch, ..)
            | MidiMessage::ControlChange(ch, ..)
            | MidiMessage::PitchBend(ch, _) => ch,
        }
    }
}

/// Routes controller messages to parameter ratios.
#[derive(Debug, Clone)]
pub struct MidiRouter {
    channel: Option<u8>,
    controllers: HashMap<u8, usize>,
}

impl MidiRouter {
    /// Resolve the configured bindings against `registry`.
    ///
    /// Bindings naming unknown parameters are dropped with a warning.
    pub fn new(config: &MidiConfig, registry: &ParameterRegistry) -> Self {
        let mut controllers = HashMap::new();
        for binding in &config.bindings {
            match registry.index_of(&binding.param) {
                Some(index) => {
                    controllers.insert(binding.cc, index);
                }
                None => warn!("CC {} bound to unknown parameter '{}'", binding.cc, binding.param),
            }
        }
        Self {
            channel: config.channel,
            controllers,
        }
    }

    /// Number of controllers with a resolved parameter.
    pub fn bound_count(&self) -> usize {
        self.controllers.len()
    }

    /// Apply one raw MIDI message, returning the parameter index it set.
    pub fn route(&self, registry: &ParameterRegistry, bytes: &[u8]) -> Option<usize> {
        let message = MidiMessage::parse(bytes)?;
        if self.channel.is_some_and(|wanted| wanted != message.channel()) {
            return None;
        }
        let MidiMessage::ControlChange(_, ctrl, val) = message else {
            trace!("ignoring {:?}", message);
            return None;
        };
        let index = *self.controllers.get(&ctrl)?;
        registry.set_ratio(index, val as f32 / 127.0);
        Some(index)
    }
}

/// Live MIDI input feeding a shared registry.
///
/// The connection stays open until this value is dropped.
pub struct MidiListener {
    _conn: MidiInputConnection<()>,
    port_name: String,
}

impl MidiListener {
    /// Open the input port matching `port_name` (or the first one).
    pub fn connect(
        port_name: Option<&str>,
        router: MidiRouter,
        registry: Arc<RwLock<ParameterRegistry>>,
    ) -> Result<Self> {
        let midi_in = MidiInput::new("tiltmap MIDI input")?;
        let ports = midi_in.ports();

        if ports.is_empty() {
            bail!("No MIDI input ports available");
        }

        let port = if let Some(name) = port_name {
            ports
                .iter()
                .find(|p| {
                    midi_in
                        .port_name(p)
                        .map(|n| n.contains(name))
                        .unwrap_or(false)
                })
                .ok_or_else(|| anyhow!("MIDI port '{}' not found", name))?
                .clone()
        } else {
            ports[0].clone()
        };

        let port_name_actual = midi_in.port_name(&port)?;
        let conn = midi_in
            .connect(
                &port,
                "tiltmap-input",
                move |_stamp, message, _| match registry.read() {
                    Ok(guard) => {
                        if let Some(index) = router.route(&guard, message) {
                            trace!("MIDI -> #{} = {}", index, guard.value(index));
                        }
                    }
                    Err(_) => warn!("registry lock poisoned; dropping MIDI message"),
                },
                (),
            )
            .map_err(|e| anyhow!("Failed to connect to MIDI port '{}': {}", port_name_actual, e))?;

        info!("MIDI input connected to: {}", port_name_actual);

        Ok(Self {
            _conn: conn,
            port_name: port_name_actual,
        })
    }

    /// Name of the connected port.
    pub fn port_name(&self) -> &str {
        &self.port_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MidiBinding;
    use crate::slot::Slot;

    fn registry() -> ParameterRegistry {
        let mut registry = ParameterRegistry::new();
        registry.register("/synth/gain", Slot::shared(0.0), 0.0, 0.0, 1.0, 0.01).unwrap();
        registry.register("/synth/cutoff", Slot::shared(0.0), 0.0, 0.0, 254.0, 1.0).unwrap();
        registry
    }

    fn config(channel: Option<u8>) -> MidiConfig {
        MidiConfig {
            port: None,
            channel,
            bindings: vec![
                MidiBinding { cc: 7, param: "/synth/gain".to_string() },
                MidiBinding { cc: 74, param: "/synth/cutoff".to_string() },
                MidiBinding { cc: 10, param: "/synth/missing".to_string() },
            ],
        }
    }

    #[test]
    fn test_parse_messages() {
        assert_eq!(MidiMessage::parse(&[0xB3, 1, 127]), Some(MidiMessage::ControlChange(3, 1, 127)));
        assert_eq!(MidiMessage::parse(&[0x81, 60, 10]), Some(MidiMessage::NoteOff(1, 60, 10)));
        assert_eq!(MidiMessage::parse(&[0xE0, 0x00, 0x40]), Some(MidiMessage::PitchBend(0, 8192)));
        assert_eq!(MidiMessage::parse(&[0x9F, 64, 90]).map(|m| m.channel()), Some(15));
    }

    #[test]
    fn test_parse_note_on_zero_velocity_is_note_off() {
        assert_eq!(MidiMessage::parse(&[0x90, 60, 0]), Some(MidiMessage::NoteOff(0, 60, 0)));
    }

    #[test]
    fn test_parse_rejects_short_or_unknown() {
        assert_eq!(MidiMessage::parse(&[]), None);
        assert_eq!(MidiMessage::parse(&[0xB0, 1]), None);
        assert_eq!(MidiMessage::parse(&[0xC0, 5]), None);
        assert_eq!(MidiMessage::parse(&[0xF8]), None);
    }

    #[test]
    fn test_router_sets_ratio() {
        let registry = registry();
        let router = MidiRouter::new(&config(None), &registry);
        assert_eq!(router.bound_count(), 2);

        assert_eq!(router.route(&registry, &[0xB0, 74, 127]), Some(1));
        assert_eq!(registry.value(1), 254.0);

        assert_eq!(router.route(&registry, &[0xB5, 7, 0]), Some(0));
        assert_eq!(registry.value(0), 0.0);
    }

    #[test]
    fn test_router_channel_filter() {
        let registry = registry();
        let router = MidiRouter::new(&config(Some(1)), &registry);

        assert_eq!(router.route(&registry, &[0xB0, 74, 127]), None);
        assert_eq!(registry.value(1), 0.0);
        assert_eq!(router.route(&registry, &[0xB1, 74, 127]), Some(1));
    }

    #[test]
    fn test_router_ignores_unbound_and_non_cc() {
        let registry = registry();
        let router = MidiRouter::new(&config(None), &registry);

        assert_eq!(router.route(&registry, &[0xB0, 10, 64]), None);
        assert_eq!(router.route(&registry, &[0x90, 74, 64]), None);
        assert_eq!(router.route(&registry, &[0xE0, 0, 64]), None);
    }
}
