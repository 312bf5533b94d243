//! Category records as returned by the Nexus API
//!
//! Records are kept as raw JSON objects. The API has used several field
//! names for the same thing over time, so accessors try each known name.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field names holding a parent reference, in precedence order
pub const PARENT_FIELDS: [&str; 3] = ["parent_category", "parent_category_id", "parent"];

/// A single mod category entry, passed through as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRecord(Value);

impl CategoryRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Numeric `category_id` used for ordering; absent or non-numeric is 0
    pub fn sort_key(&self) -> i64 {
        self.field("category_id").map(as_integer).unwrap_or(0)
    }

    /// `category_id`, or `id` when the record has no `category_id` at all
    pub fn identifier(&self) -> Option<&Value> {
        self.field("category_id").or_else(|| self.field("id"))
    }

    pub fn name(&self) -> Option<&Value> {
        self.field("name")
    }

    /// First truthy parent reference. When none is truthy, the last candidate
    /// (`parent`) is returned as-is so a literal 0 or `false` still shows up.
    pub fn parent(&self) -> Option<&Value> {
        PARENT_FIELDS
            .iter()
            .filter_map(|key| self.field(key))
            .find(|v| is_truthy(v))
            .or_else(|| self.field("parent"))
    }
}

impl From<Value> for CategoryRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Sort ascending by `category_id`. Stable, so ties keep API order.
pub fn sort_categories(records: &mut [CategoryRecord]) {
    records.sort_by_key(CategoryRecord::sort_key);
}

fn as_integer(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

/// JSON truthiness: null, false, 0, "" and empty containers are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Short type name for diagnostics ("object", "string", ...)
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
