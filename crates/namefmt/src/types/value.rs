use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The flat variable-name-to-value mapping supplied at evaluation time.
///
/// Created fresh per filename-generation call by the capture layer; the
/// evaluator only reads it. There is no nesting: every value is a number or
/// a string, and a missing key stringifies to `"undefined"` before filters
/// run (see [`crate::evaluator::MISSING_VALUE`]).
pub type TemplateContext = HashMap<String, Value>;

/// A runtime value supplied for a template variable.
///
/// The `Value` enum lets callers pass captured-request metadata — titles,
/// hosts, sizes, timestamps — without converting everything to strings
/// first. The evaluator stringifies values on demand.
///
/// # Example
///
/// ```
/// use namefmt::Value;
///
/// // Numbers become Value::Number
/// let size: Value = 4096.into();
///
/// // Strings become Value::String
/// let title: Value = "My Awesome Video".into();
///
/// assert_eq!(size.to_string(), "4096");
/// assert_eq!(title.to_string(), "My Awesome Video");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// An integer number (sizes, counts, timestamps).
    Number(i64),

    /// A floating-point number (durations, rates).
    Float(f64),

    /// A string value.
    String(String),
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is one.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
