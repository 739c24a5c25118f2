//! Metadata staged between declaration and registration

use std::sync::Arc;

use log::{debug, warn};

use crate::error::{RegistryError, Result};
use crate::mapping::Scale;
use crate::sensor::{Anchors, Axis, Curve};
use crate::slot::Slot;

/// Parsed "acc" metadata: `<axis> <curve> <amin> <amid> <amax>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccMetadata {
    pub axis: Axis,
    pub curve: Curve,
    pub anchors: Anchors,
}

impl AccMetadata {
    /// Parse a whitespace-separated "acc" value
    ///
    /// Tokens past the fifth are ignored.
    pub fn parse(value: &str) -> Result<Self> {
        let malformed = |reason: String| RegistryError::MalformedMetadata {
            value: value.to_string(),
            reason,
        };

        let mut tokens = value.split_whitespace();
        let mut next = |field: &str| {
            tokens
                .next()
                .ok_or_else(|| malformed(format!("missing {}", field)))
        };

        let axis_tok = next("axis")?;
        let curve_tok = next("curve")?;
        let amin_tok = next("amin")?;
        let amid_tok = next("amid")?;
        let amax_tok = next("amax")?;

        let axis: i32 = axis_tok
            .parse()
            .map_err(|_| malformed(format!("axis '{}' is not an integer", axis_tok)))?;
        let curve: i32 = curve_tok
            .parse()
            .map_err(|_| malformed(format!("curve '{}' is not an integer", curve_tok)))?;
        let float = |tok: &str| {
            tok.parse::<f64>()
                .map_err(|_| malformed(format!("'{}' is not a number", tok)))
        };
        let (amin, amid, amax) = (float(amin_tok)?, float(amid_tok)?, float(amax_tok)?);

        let axis = usize::try_from(axis)
            .ok()
            .and_then(Axis::from_index)
            .ok_or_else(|| malformed(format!("axis {} outside [0, 3)", axis)))?;
        let curve = Curve::from_id(curve).map_err(|e| malformed(e.to_string()))?;
        let anchors = Anchors::new(amin, amid, amax).map_err(|e| malformed(e.to_string()))?;

        Ok(Self { axis, curve, anchors })
    }
}

/// Metadata waiting for the next registration
///
/// Single use: registration takes the whole struct and leaves the default
/// (linear scale, no unit, no acc) behind.
#[derive(Debug, Default)]
pub struct PendingMetadata {
    slot: Option<Arc<Slot>>,
    scale: Scale,
    unit: String,
    acc: Option<String>,
}

impl PendingMetadata {
    /// Stage one key/value pair for `slot`
    pub fn declare(&mut self, slot: &Arc<Slot>, key: &str, value: &str) {
        if let Some(staged) = &self.slot {
            if !Arc::ptr_eq(staged, slot) {
                warn!("metadata staged for another slot was never registered; discarding it");
                *self = Self::default();
            }
        }
        self.slot = Some(Arc::clone(slot));

        match key {
            "scale" => self.scale = Scale::from_metadata(value),
            "unit" => self.unit = value.to_string(),
            "acc" => self.acc = Some(value.to_string()),
            _ => debug!("ignoring metadata {}={}", key, value),
        }
    }

    /// Take everything staged for `slot`, resetting to defaults
    ///
    /// Metadata staged for a different slot is discarded.
    pub fn take_for(&mut self, slot: &Arc<Slot>) -> Self {
        let pending = std::mem::take(self);
        match &pending.slot {
            Some(staged) if !Arc::ptr_eq(staged, slot) => {
                warn!("metadata staged for another slot; registering with defaults");
                Self::default()
            }
            _ => pending,
        }
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Raw "acc" value, if one was declared
    pub fn acc(&self) -> Option<&str> {
        self.acc.as_deref()
    }

    pub fn into_unit(self) -> String {
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_acc_metadata() {
        let acc = AccMetadata::parse("1 2 -10 0 10").unwrap();
        assert_eq!(acc.axis, Axis::Y);
        assert_eq!(acc.curve, Curve::UpDown);
        assert_eq!(acc.anchors, Anchors::new(-10.0, 0.0, 10.0).unwrap());
    }

    #[test]
    fn test_parse_acc_extra_whitespace_and_tokens() {
        let acc = AccMetadata::parse("  0\t0  -1.5 0.25 3   trailing").unwrap();
        assert_eq!(acc.axis, Axis::X);
        assert_eq!(acc.anchors.amid, 0.25);
    }

    #[test]
    fn test_parse_acc_rejects_out_of_range() {
        // axis 5 is outside [0, 3)
        assert!(matches!(
            AccMetadata::parse("5 2 1 2 3"),
            Err(RegistryError::MalformedMetadata { .. })
        ));
        assert!(AccMetadata::parse("0 4 -1 0 1").is_err());
        assert!(AccMetadata::parse("-1 0 -1 0 1").is_err());
    }

    #[test]
    fn test_parse_acc_rejects_bad_anchors() {
        assert!(AccMetadata::parse("0 0 1 0 -1").is_err());
        assert!(AccMetadata::parse("0 0 -1 2 1").is_err());
    }

    #[test]
    fn test_parse_acc_rejects_garbage() {
        assert!(AccMetadata::parse("").is_err());
        assert!(AccMetadata::parse("0 0 -1 0").is_err());
        assert!(AccMetadata::parse("x 0 -1 0 1").is_err());
        assert!(AccMetadata::parse("0 0 low 0 1").is_err());
    }

    #[test]
    fn test_pending_is_single_use() {
        let slot = Slot::shared(0.0);
        let mut pending = PendingMetadata::default();
        pending.declare(&slot, "scale", "log");
        pending.declare(&slot, "unit", "Hz");
        pending.declare(&slot, "acc", "0 0 -1 0 1");
        pending.declare(&slot, "tooltip", "ignored");

        let taken = pending.take_for(&slot);
        assert_eq!(taken.scale(), Scale::Logarithmic);
        assert_eq!(taken.unit(), "Hz");
        assert_eq!(taken.acc(), Some("0 0 -1 0 1"));

        let again = pending.take_for(&slot);
        assert_eq!(again.scale(), Scale::Linear);
        assert_eq!(again.unit(), "");
        assert_eq!(again.acc(), None);
    }

    #[test]
    fn test_pending_for_other_slot_is_discarded() {
        let a = Slot::shared(0.0);
        let b = Slot::shared(0.0);
        let mut pending = PendingMetadata::default();

        pending.declare(&a, "scale", "exp");
        let taken = pending.take_for(&b);
        assert_eq!(taken.scale(), Scale::Linear);

        // Switching slots mid-declaration drops the earlier entries
        pending.declare(&a, "unit", "dB");
        pending.declare(&b, "scale", "log");
        let taken = pending.take_for(&b);
        assert_eq!(taken.unit(), "");
        assert_eq!(taken.scale(), Scale::Logarithmic);
    }
}
