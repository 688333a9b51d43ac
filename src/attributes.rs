use std::collections::HashMap;

use opentelemetry::{KeyValue, Value};

/// Attribute map attached to events: name to scalar value.
pub type AttributeMap = HashMap<String, AttributeValue>;

/// Scalar attribute value accepted at the telemetry API edge.
///
/// Deliberately narrower than [`opentelemetry::Value`]: no arrays or nested
/// structures, matching what the collector schema expects from extension
/// events.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<AttributeValue> for Value {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::String(s) => Value::String(s.into()),
            AttributeValue::Int(i) => Value::I64(i),
            AttributeValue::Float(f) => Value::F64(f),
            AttributeValue::Bool(b) => Value::Bool(b),
        }
    }
}

/// Convert an attribute map into SDK key-values, consuming the map.
pub(crate) fn to_key_values(attributes: AttributeMap) -> Vec<KeyValue> {
    attributes
        .into_iter()
        .map(|(key, value)| KeyValue::new(key, Value::from(value)))
        .collect()
}
