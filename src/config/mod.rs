//! Configuration loading, validation and application

mod schema;

pub use schema::*;

use anyhow::{Context, Result};
use log::warn;
use std::path::Path;

use crate::registry::ParameterRegistry;

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<TiltConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: TiltConfig = serde_yaml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Apply the configured sensor mappings to `registry`
///
/// Unknown parameter names and rejected mappings are skipped with a
/// warning. Returns how many mappings were applied.
pub fn apply_sensor_mappings(config: &TiltConfig, registry: &mut ParameterRegistry) -> usize {
    let mut applied = 0;
    for mapping in &config.sensors {
        let Some(index) = registry.index_of(&mapping.param) else {
            warn!("sensor mapping refers to unknown parameter '{}'", mapping.param);
            continue;
        };
        match registry.remap_axis(
            index,
            mapping.axis,
            mapping.curve,
            mapping.amin,
            mapping.amid,
            mapping.amax,
        ) {
            Ok(()) => applied += 1,
            Err(e) => warn!("skipping sensor mapping for '{}': {}", mapping.param, e),
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::{Axis, Curve};
    use crate::slot::Slot;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_minimal_config() {
        let yaml = r#"
sensors:
  - param: /synth/gain
    axis: z
    curve: down
    amin: -9.81
    amid: 0
    amax: 9.81
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.sensors.len(), 1);
        assert_eq!(config.sensors[0].axis, Some(Axis::Z));
        assert!(config.midi.bindings.is_empty());
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let yaml = r#"
midi:
  channel: 42
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/tiltmap.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tiltmap.yaml"));
    }

    #[test]
    fn test_apply_sensor_mappings() {
        let mut registry = ParameterRegistry::new();
        let gain = Slot::shared(0.5);
        let idx = registry.register("/synth/gain", gain.clone(), 0.5, 0.0, 1.0, 0.01).unwrap();

        let config: TiltConfig = serde_yaml::from_str(
            r#"
sensors:
  - param: /synth/gain
    axis: y
  - param: /synth/missing
    axis: x
"#,
        )
        .unwrap();

        assert_eq!(apply_sensor_mappings(&config, &mut registry), 1);
        assert_eq!(registry.active_mapping(idx), Some((Axis::Y, Curve::Up)));

        registry.propagate(Axis::Y, 1.0);
        assert_eq!(gain.load(), 1.0);
    }
}
