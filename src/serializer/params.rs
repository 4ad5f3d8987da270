use super::{lookup, place, Document, FieldError};
use crate::group::ParameterGroup;
use crate::param::Param;
use crate::traverse::{self, Visitor, VisitorMut};
use crate::value::ValueText;
use serde_json::Value;
use tracing::{debug, warn};

/// Writes every serializable parameter of `group` into `json`.
pub fn serialize_group(json: &mut Document, group: &ParameterGroup) {
    let mut writer = DocumentWriter { out: json, frames: Vec::new() };
    traverse::walk(group, &mut writer);
}

/// Reads `group` back from `json`. Returns whether any parameter was set.
pub fn deserialize_group(json: &Document, group: &mut ParameterGroup) -> bool {
    let mut reader = DocumentReader { root: json, frames: Vec::new() };
    traverse::walk_mut(group, &mut reader)
}

pub fn serialize_param(json: &mut Document, param: &Param) {
    if !param.is_serializable() {
        debug!(parameter = param.name(), "parameter is not serializable");
        return;
    }
    json.insert(param.name().to_string(), Value::String(param.to_text()));
}

/// Returns whether the parameter was set from `json`.
pub fn deserialize_param(json: &Document, param: &mut Param) -> bool {
    if !param.is_serializable() {
        debug!(parameter = param.name(), "parameter is not serializable");
        return false;
    }
    let text = match json.get(param.name()) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(value)) => value.to_text(),
        Some(_) => {
            warn!(parameter = param.name(), "parameter value is not a string");
            return false;
        }
        None => {
            debug!(parameter = param.name(), "parameter not found in document");
            return false;
        }
    };
    if text.is_empty() {
        return false;
    }
    match param.set_from_text(&text) {
        Ok(()) => true,
        Err(err) => {
            warn!(parameter = param.name(), error = %err, "could not parse parameter value");
            false
        }
    }
}

/// Array of per-element strings.
pub fn values_to_json<T: ValueText>(values: &[T]) -> Value {
    Value::Array(values.iter().map(|value| Value::String(value.to_text())).collect())
}

pub fn values_from_json<T: ValueText>(key: &str, json: &Value) -> Result<Vec<T>, FieldError> {
    let Value::Array(items) = json else {
        return Err(FieldError::WrongType { key: key.to_string(), expected: "an array" });
    };
    items
        .iter()
        .map(|item| {
            let text = match item {
                Value::String(text) => text.clone(),
                Value::Number(number) => number.to_string(),
                _ => return Err(FieldError::WrongType { key: key.to_string(), expected: "an array of strings" }),
            };
            T::from_text(&text).map_err(|source| FieldError::Value { key: key.to_string(), source })
        })
        .collect()
}

pub fn serialize_values<T: ValueText>(json: &mut Document, name: &str, values: &[T]) {
    json.insert(name.to_string(), values_to_json(values));
}

/// Replaces `values` with the list stored under `name`. On any failure the
/// list is left as it was.
pub fn deserialize_values<T: ValueText>(json: &Document, name: &str, values: &mut Vec<T>) -> Result<(), FieldError> {
    let Some(stored) = json.get(name) else {
        warn!(name, "name not found in document");
        return Err(FieldError::Missing { key: name.to_string() });
    };
    match values_from_json(name, stored) {
        Ok(parsed) => {
            *values = parsed;
            Ok(())
        }
        Err(err) => {
            warn!(name, error = %err, "value list left unchanged");
            Err(err)
        }
    }
}

struct DocumentWriter<'a> {
    out: &'a mut Document,
    /// Name and fields of each group entered but not yet left.
    frames: Vec<(String, Document)>,
}

impl DocumentWriter<'_> {
    fn current(&mut self) -> &mut Document {
        match self.frames.last_mut() {
            Some((_, fields)) => fields,
            None => &mut *self.out,
        }
    }
}

impl Visitor for DocumentWriter<'_> {
    fn enter_group(&mut self, group: &ParameterGroup) -> bool {
        if !group.is_serializable() {
            warn!(group = group.name(), "group is not serializable");
            return false;
        }
        self.frames.push((group.name().to_string(), Document::new()));
        true
    }

    fn leave_group(&mut self, _group: &ParameterGroup) {
        if let Some((name, fields)) = self.frames.pop() {
            place(self.current(), &name, fields);
        }
    }

    fn visit_param(&mut self, param: &Param) {
        serialize_param(self.current(), param);
    }
}

struct DocumentReader<'a> {
    root: &'a Document,
    frames: Vec<&'a Document>,
}

impl VisitorMut for DocumentReader<'_> {
    fn enter_group(&mut self, group: &mut ParameterGroup) -> bool {
        if !group.is_serializable() {
            warn!(group = group.name(), "group is not serializable");
            return false;
        }
        let parent = self.frames.last().copied().unwrap_or(self.root);
        match lookup(parent, group.name()) {
            Ok(fields) => {
                self.frames.push(fields);
                true
            }
            Err(err) => {
                warn!(group = group.name(), error = %err, "group left unchanged");
                false
            }
        }
    }

    fn leave_group(&mut self, _group: &mut ParameterGroup) {
        self.frames.pop();
    }

    fn visit_param(&mut self, param: &mut Param) -> bool {
        let fields = self.frames.last().copied().unwrap_or(self.root);
        deserialize_param(fields, param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::Parameter;
    use glam::{IVec2, Vec3};
    use serde_json::json;

    fn document(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn leaves_are_written_as_strings() {
        let group = ParameterGroup::new("")
            .with(Parameter::new("enabled", true))
            .with(Parameter::new("count", -3_i32))
            .with(Parameter::new("offset", Vec3::new(0.5, 0.0, -1.0)));
        let mut json = Document::new();
        serialize_group(&mut json, &group);
        assert_eq!(Value::Object(json), json!({ "enabled": "1", "count": "-3", "offset": "0.5, 0, -1" }));
    }

    #[test]
    fn named_groups_nest_and_unnamed_groups_flatten() {
        let group = ParameterGroup::new("")
            .with_group(ParameterGroup::new("light").with(Parameter::new("exposure", 2.0_f32)))
            .with_group(ParameterGroup::new("").with(Parameter::new("inline", 1_i32)));
        let mut json = Document::new();
        serialize_group(&mut json, &group);
        assert_eq!(Value::Object(json), json!({ "light": { "exposure": "2" }, "inline": "1" }));
    }

    #[test]
    fn empty_and_malformed_values_are_skipped() {
        let mut group = ParameterGroup::new("")
            .with(Parameter::new("a", 1_i32))
            .with(Parameter::new("b", 2_i32))
            .with(Parameter::new("c", 3_i32));
        let json = document(json!({ "a": "", "b": "two", "c": "30" }));
        assert!(deserialize_group(&json, &mut group));
        assert_eq!(group.get::<i32>("a").map(Parameter::get), Some(1));
        assert_eq!(group.get::<i32>("b").map(Parameter::get), Some(2));
        assert_eq!(group.get::<i32>("c").map(Parameter::get), Some(30));
    }

    #[test]
    fn native_numbers_are_accepted_on_read() {
        let mut group = ParameterGroup::new("").with(Parameter::new("gain", 0.0_f32));
        let json = document(json!({ "gain": 0.25 }));
        deserialize_group(&json, &mut group);
        assert_eq!(group.get::<f32>("gain").map(Parameter::get), Some(0.25));
    }

    #[test]
    fn missing_named_group_is_left_untouched() {
        let mut group = ParameterGroup::new("")
            .with_group(ParameterGroup::new("missing").with(Parameter::new("x", 5_i32)))
            .with(Parameter::new("y", 6_i32));
        let json = document(json!({ "x": "50", "y": "60" }));
        deserialize_group(&json, &mut group);
        let missing = group.group("missing").expect("group");
        assert_eq!(missing.get::<i32>("x").map(Parameter::get), Some(5));
        assert_eq!(group.get::<i32>("y").map(Parameter::get), Some(60));
    }

    #[test]
    fn value_lists_round_trip_and_failures_keep_old_list() {
        let mut json = Document::new();
        let cells = vec![IVec2::new(0, 0), IVec2::new(-4, 9)];
        serialize_values(&mut json, "cells", &cells);
        assert_eq!(json["cells"], json!(["0, 0", "-4, 9"]));

        let mut restored: Vec<IVec2> = Vec::new();
        deserialize_values(&json, "cells", &mut restored).expect("cells present");
        assert_eq!(restored, cells);

        let broken = document(json!({ "cells": ["1, 2", "oops"] }));
        assert!(deserialize_values(&broken, "cells", &mut restored).is_err());
        assert_eq!(restored, cells);
        assert!(matches!(
            deserialize_values(&broken, "absent", &mut restored),
            Err(FieldError::Missing { .. })
        ));
    }
}
