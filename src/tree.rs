//! JSON value tree used throughout the library.

use indexmap::IndexMap;
use serde::Serialize;

/// A parsed JSON value. Object keys keep their insertion order so that
/// pretty-printed output (and the line spans derived from it) is stable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// True for a non-empty array whose every element is an object.
    ///
    /// This is the shape the diff engine specializes in: rows of records
    /// that should be matched across the two sides rather than compared
    /// positionally.
    pub fn is_array_of_objects(&self) -> bool {
        match self {
            Value::Array(items) => {
                !items.is_empty() && items.iter().all(|item| matches!(item, Value::Object(_)))
            }
            _ => false,
        }
    }

    /// Structural equality: arrays element-wise in order, objects by equal
    /// key sets and recursively equal values, primitives by exact equality.
    pub fn deep_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.deep_equal(y))
            }
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, value)| b.get(key).is_some_and(|v| value.deep_equal(v)))
            }
            _ => false,
        }
    }

    /// Returns a short preview of the value, truncated to max_len.
    pub fn preview(&self, max_len: usize) -> String {
        let preview = match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::String(s) => format!("\"{}\"", s),
            Value::Object(map) => {
                let count = map.len();
                if count == 0 {
                    "{}".to_string()
                } else if count == 1 {
                    format!("{{ {} key }}", count)
                } else {
                    format!("{{ {} keys }}", count)
                }
            }
            Value::Array(arr) => {
                let count = arr.len();
                if count == 0 {
                    "[]".to_string()
                } else if count == 1 {
                    format!("[ {} item ]", count)
                } else {
                    format!("[ {} items ]", count)
                }
            }
        };

        if preview.len() > max_len {
            format!("{}...", &preview[..max_len.saturating_sub(3)])
        } else {
            preview
        }
    }
}

/// Renders a number the way a JSON serializer would: integral values
/// without a fractional part, everything else via the shortest form.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Object(
                obj.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}
