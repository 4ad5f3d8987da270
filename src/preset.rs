//! Parameter trees saved to and loaded from JSON files.

use crate::group::ParameterGroup;
use crate::serializer::{self, Document};
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub fn save_preset(path: impl AsRef<Path>, group: &ParameterGroup) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("Creating preset directory {}", parent.display()))?;
    }
    let mut json = Document::new();
    serializer::serialize_group(&mut json, group);
    let text = serde_json::to_string_pretty(&Value::Object(json))?;
    fs::write(path, text.as_bytes()).with_context(|| format!("Writing preset file {}", path.display()))?;
    Ok(())
}

/// Reads `path` into `group`. Entries the file lacks or cannot parse keep
/// their current value; only an unreadable or non-object file is an error.
/// Returns whether any parameter was set.
pub fn load_preset(path: impl AsRef<Path>, group: &mut ParameterGroup) -> Result<bool> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("Reading preset file {}", path.display()))?;
    let value: Value =
        serde_json::from_slice(&bytes).with_context(|| format!("Parsing preset file {}", path.display()))?;
    let Value::Object(json) = value else {
        return Err(anyhow!("Preset file {} does not contain a JSON object", path.display()));
    };
    Ok(serializer::deserialize_group(&json, group))
}

pub fn load_preset_or_keep(path: impl AsRef<Path>, group: &mut ParameterGroup) -> bool {
    match load_preset(path, group) {
        Ok(changed) => changed,
        Err(err) => {
            tracing::warn!(error = ?err, group = group.name(), "preset load failed, keeping current values");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::Parameter;
    use crate::value::Color;

    fn sample() -> ParameterGroup {
        ParameterGroup::new("look")
            .with(Parameter::new("tint", Color::new(1.0, 0.5, 0.0, 1.0)))
            .with(Parameter::with_range("steps", 12_i32, 0, 64))
    }

    #[test]
    fn saved_preset_loads_into_fresh_group() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("presets").join("look.json");
        save_preset(&path, &sample()).expect("save preset");

        let mut group = ParameterGroup::new("look")
            .with(Parameter::new("tint", Color::WHITE))
            .with(Parameter::with_range("steps", 0_i32, 0, 64));
        assert!(load_preset(&path, &mut group).expect("load preset"));
        assert_eq!(group, sample());
    }

    #[test]
    fn non_object_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("list.json");
        fs::write(&path, "[1, 2, 3]").expect("write file");
        let mut group = sample();
        assert!(load_preset(&path, &mut group).is_err());
        assert!(!load_preset_or_keep(&path, &mut group));
        assert_eq!(group, sample());
    }

    #[test]
    fn missing_file_keeps_values() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut group = sample();
        assert!(!load_preset_or_keep(dir.path().join("absent.json"), &mut group));
        assert_eq!(group, sample());
    }
}
