//! Runtime values passed to and returned from methods

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A dynamically typed value flowing through method calls
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    S64(i64),
    F64(f64),
    String(String),
    Symbol(String),
    List(Vec<Value>),
    Record { type_name: String, fields: Vec<(String, Value)> },
}

impl Value {
    /// Helper to create a symbol
    pub fn sym(s: impl Into<String>) -> Self {
        Value::Symbol(s.into())
    }

    /// Helper to create a record from name/value pairs
    pub fn record<K, V>(
        type_name: impl Into<String>,
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Record {
            type_name: type_name.into(),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_s64(&self) -> Option<i64> {
        match self {
            Value::S64(n) => Some(*n),
            _ => None,
        }
    }

    /// Look up a record field by name
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record { fields, .. } => fields.iter().find(|(k, _)| k == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Short name of the variant, used in conversion errors
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::S64(_) => "s64",
            Value::F64(_) => "f64",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Record { .. } => "record",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::S64(n) => write!(f, "{}", n),
            Value::F64(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(s) => write!(f, ":{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Record { type_name, fields } => {
                write!(f, "#<{}", type_name)?;
                for (name, value) in fields {
                    write!(f, " {}={}", name, value)?;
                }
                write!(f, ">")
            }
        }
    }
}

/// Error converting a `Value` into a Rust type
#[derive(Debug, Clone, PartialEq, Error)]
#[error("expected {expected}, got {got}")]
pub struct ConversionError {
    pub expected: &'static str,
    pub got: &'static str,
}

impl ConversionError {
    fn new(expected: &'static str, value: &Value) -> Self {
        Self {
            expected,
            got: value.kind(),
        }
    }
}

// ============================================================================
// From implementations
// ============================================================================

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::S64(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::S64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

// ============================================================================
// TryFrom implementations
// ============================================================================

impl TryFrom<Value> for bool {
    type Error = ConversionError;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::Bool(b) => Ok(b),
            other => Err(ConversionError::new("bool", &other)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = ConversionError;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::S64(n) => Ok(n),
            other => Err(ConversionError::new("s64", &other)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = ConversionError;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::F64(x) => Ok(x),
            Value::S64(n) => Ok(n as f64),
            other => Err(ConversionError::new("f64", &other)),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = ConversionError;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::String(s) | Value::Symbol(s) => Ok(s),
            other => Err(ConversionError::new("string", &other)),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = ConversionError;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::List(items) => Ok(items),
            other => Err(ConversionError::new("list", &other)),
        }
    }
}
