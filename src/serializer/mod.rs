//! JSON documents for parameter trees and scene objects.
//!
//! Parameters are stored as strings under their names, nested groups as
//! nested objects, and a group with an empty name writes its children into
//! the enclosing object. Reading is tolerant: anything missing or malformed
//! is logged and the target keeps its current value.

mod params;
mod scene;

pub use params::{
    deserialize_group, deserialize_param, deserialize_values, serialize_group, serialize_param, serialize_values,
    values_from_json, values_to_json,
};
pub use scene::{
    deserialize_camera, deserialize_easy_cam, deserialize_node, serialize_camera, serialize_easy_cam, serialize_node,
};

use crate::value::{ValueError, ValueText};
use serde_json::{Map, Value};
use tracing::warn;

pub type Document = Map<String, Value>;

/// Why a single document field could not be applied.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("'{key}' not found")]
    Missing { key: String },
    #[error("'{key}' should be {expected}")]
    WrongType { key: String, expected: &'static str },
    #[error("'{key}': {source}")]
    Value {
        key: String,
        #[source]
        source: ValueError,
    },
}

/// Writes `fields` under `name`, or straight into `json` when `name` is empty.
/// An existing object under `name` is merged into rather than replaced.
pub(crate) fn place(json: &mut Document, name: &str, fields: Document) {
    if name.is_empty() {
        json.extend(fields);
        return;
    }
    match json.get_mut(name) {
        Some(Value::Object(existing)) => existing.extend(fields),
        _ => {
            json.insert(name.to_string(), Value::Object(fields));
        }
    }
}

/// The object under `name`, or `json` itself when `name` is empty.
pub(crate) fn lookup<'a>(json: &'a Document, name: &str) -> Result<&'a Document, FieldError> {
    if name.is_empty() {
        return Ok(json);
    }
    match json.get(name) {
        Some(Value::Object(fields)) => Ok(fields),
        Some(_) => Err(FieldError::WrongType { key: name.to_string(), expected: "an object" }),
        None => Err(FieldError::Missing { key: name.to_string() }),
    }
}

fn field<'a>(json: &'a Document, key: &str) -> Result<&'a Value, FieldError> {
    json.get(key).ok_or_else(|| FieldError::Missing { key: key.to_string() })
}

pub(crate) fn read_number(json: &Document, key: &str) -> Result<f32, FieldError> {
    match field(json, key)? {
        Value::Number(number) => number
            .as_f64()
            .map(|value| value as f32)
            .ok_or_else(|| FieldError::WrongType { key: key.to_string(), expected: "a number" }),
        Value::String(text) => read_text_value(key, text),
        _ => Err(FieldError::WrongType { key: key.to_string(), expected: "a number" }),
    }
}

pub(crate) fn read_int(json: &Document, key: &str) -> Result<i32, FieldError> {
    match field(json, key)? {
        Value::Number(number) => number
            .as_i64()
            .and_then(|value| i32::try_from(value).ok())
            .ok_or_else(|| FieldError::WrongType { key: key.to_string(), expected: "an integer" }),
        Value::String(text) => read_text_value(key, text),
        _ => Err(FieldError::WrongType { key: key.to_string(), expected: "an integer" }),
    }
}

pub(crate) fn read_bool(json: &Document, key: &str) -> Result<bool, FieldError> {
    match field(json, key)? {
        Value::Bool(value) => Ok(*value),
        Value::String(text) => read_text_value(key, text),
        _ => Err(FieldError::WrongType { key: key.to_string(), expected: "a boolean" }),
    }
}

pub(crate) fn read_text<T: ValueText>(json: &Document, key: &str) -> Result<T, FieldError> {
    match field(json, key)? {
        Value::String(text) => read_text_value(key, text),
        _ => Err(FieldError::WrongType { key: key.to_string(), expected: "a string" }),
    }
}

fn read_text_value<T: ValueText>(key: &str, text: &str) -> Result<T, FieldError> {
    T::from_text(text).map_err(|source| FieldError::Value { key: key.to_string(), source })
}

/// Applies a successfully read field, logging and collecting the failure otherwise.
pub(crate) fn apply<T>(
    result: Result<T, FieldError>,
    failures: &mut Vec<FieldError>,
    set: impl FnOnce(T),
) {
    match result {
        Ok(value) => set(value),
        Err(err) => {
            warn!(error = %err, "field left unchanged");
            failures.push(err);
        }
    }
}
