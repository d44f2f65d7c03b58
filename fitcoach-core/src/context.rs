//! Backend-owned session context, mirrored for display only.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open-ended key/value session state (user profile, diet preferences, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionContext(Map<String, Value>);

impl SessionContext {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Key, one-line summary and truthiness for every entry, in map order.
    pub fn summaries(&self) -> Vec<(&str, String, bool)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), summarize_value(value), is_truthy(value)))
            .collect()
    }
}

impl From<Map<String, Value>> for SessionContext {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Flatten a JSON value into a short human-readable summary.
///
/// Nested structures are never expanded: arrays render as an item count and
/// objects as a property count.
pub fn summarize_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Array(items) if items.is_empty() => "empty array".to_string(),
        Value::Array(items) => format!("{} items", items.len()),
        Value::Object(fields) if fields.is_empty() => "empty object".to_string(),
        Value::Object(fields) => format!("{} properties", fields.len()),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
    }
}

/// Whether a value should be rendered as "set". Empty containers count as set.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
