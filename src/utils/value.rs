//! Loosely typed values and their coercion to text
//!
//! Handlers receive values from dynamic data binding (JSON bodies, query
//! rows) and need a printable form without failing the request. [`Value`]
//! enumerates every shape those values take; [`to_string_or`] renders any of
//! them, substituting a caller-supplied fallback for absent values.

use chrono::{NaiveDate, NaiveDateTime};

/// A loosely typed value as handed over by dynamic data binding
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    OptText(Option<String>),
    Int(i64),
    OptInt(Option<i64>),
    Float(f64),
    OptFloat(Option<f64>),
    Bool(bool),
    OptBool(Option<bool>),
    DateTime(NaiveDateTime),
    OptDateTime(Option<NaiveDateTime>),
    /// Anything without dedicated handling, kept in its JSON form
    Other(serde_json::Value),
}

/// Render `value` as text, returning `fallback` for null and absent values.
///
/// Floats use six fixed decimals; infinities render as `+Inf`/`-Inf`. An absent optional boolean renders as
/// `"false"` rather than `fallback`. Never fails.
pub fn to_string_or(value: &Value, fallback: &str) -> String {
    match value {
        Value::Null => fallback.to_string(),
        Value::Text(text) => text.clone(),
        Value::OptText(text) => text.clone().unwrap_or_else(|| fallback.to_string()),
        Value::Int(n) => n.to_string(),
        Value::OptInt(n) => n.map_or_else(|| fallback.to_string(), |n| n.to_string()),
        Value::Float(f) => format_float(*f),
        Value::OptFloat(f) => f.map_or_else(|| fallback.to_string(), format_float),
        Value::Bool(b) => b.to_string(),
        Value::OptBool(b) => b.unwrap_or(false).to_string(),
        Value::DateTime(dt) => dt.to_string(),
        Value::OptDateTime(dt) => dt.map_or_else(|| fallback.to_string(), |dt| dt.to_string()),
        Value::Other(other) => other.to_string(),
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "+Inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{:.6}", f)
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Option<String>> for Value {
    fn from(text: Option<String>) -> Self {
        Value::OptText(text)
    }
}

impl From<Option<&str>> for Value {
    fn from(text: Option<&str>) -> Self {
        Value::OptText(text.map(str::to_string))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<Option<i64>> for Value {
    fn from(n: Option<i64>) -> Self {
        Value::OptInt(n)
    }
}

impl From<Option<i32>> for Value {
    fn from(n: Option<i32>) -> Self {
        Value::OptInt(n.map(i64::from))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Option<f64>> for Value {
    fn from(f: Option<f64>) -> Self {
        Value::OptFloat(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Option<bool>> for Value {
    fn from(b: Option<bool>) -> Self {
        Value::OptBool(b)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<Option<NaiveDateTime>> for Value {
    fn from(dt: Option<NaiveDateTime>) -> Self {
        Value::OptDateTime(dt)
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::DateTime(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::String(s) => Value::Text(s),
            // Integers outside i64 stay as written rather than losing precision
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Value::Int(i),
                (None, Some(f)) if n.is_f64() => Value::Float(f),
                _ => Value::Other(serde_json::Value::Number(n)),
            },
            other => Value::Other(other),
        }
    }
}
