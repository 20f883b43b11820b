//! Schema node wrapper.
//!
//! A [`SchemaNode`] is one already-parsed value from a JSON Schema document,
//! such as the value of a `"required"` keyword. Rules read it through the
//! coercions defined here rather than matching on raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Immutable view over a parsed JSON Schema value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaNode(Value);

impl SchemaNode {
    /// Wrap a JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The wrapped JSON value.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Look up a child node by object key.
    pub fn get(&self, key: &str) -> Option<SchemaNode> {
        self.0.get(key).cloned().map(SchemaNode)
    }

    /// Coerce the node to a boolean.
    ///
    /// - booleans map to themselves
    /// - integers are `true` when non-zero; floating point numbers are `false`
    /// - strings are `true` only when the trimmed text is exactly `"true"`
    /// - `null`, arrays and objects are `false`
    pub fn as_boolean(&self) -> bool {
        match &self.0 {
            Value::Bool(b) => *b,
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i != 0
                } else if let Some(u) = n.as_u64() {
                    u != 0
                } else {
                    false
                }
            }
            Value::String(s) => s.trim() == "true",
            Value::Null | Value::Array(_) | Value::Object(_) => false,
        }
    }
}

impl From<Value> for SchemaNode {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<bool> for SchemaNode {
    fn from(value: bool) -> Self {
        Self(Value::Bool(value))
    }
}
