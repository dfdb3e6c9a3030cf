//! # Raw Values
//!
//! Untyped input as it arrives from outside the engine.
//!
//! [`RawValue`] is the only place where the engine accepts something that is
//! not already an `f64`. It is converted to a number by
//! [`validation::parse`](crate::domain::validation::parse); arithmetic code
//! never sees it.
//!
//! # Examples
//!
//! ```
//! use safe_calc::domain::value_objects::RawValue;
//!
//! let from_json = RawValue::from(serde_json::json!("42"));
//! assert_eq!(from_json, RawValue::Text("42".to_string()));
//! assert!(RawValue::from(None::<f64>).is_absent());
//! ```

use serde_json::Value;
use std::fmt;

/// An operand before it has been validated.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Missing or null.
    Absent,
    /// Already numeric; may still be NaN or infinite.
    Number(f64),
    /// Text to be parsed.
    Text(String),
    /// A boolean, coerced to `1` or `0`.
    Bool(bool),
    /// A list of values.
    List(Vec<RawValue>),
    /// Any structured value with no numeric meaning.
    Object,
}

impl RawValue {
    /// Returns true for [`RawValue::Absent`].
    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Name of the value's type, as used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Absent => "null",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Bool(_) => "boolean",
            Self::List(_) => "array",
            Self::Object => "object",
        }
    }

    /// Coerces a non-text value to a number.
    ///
    /// Booleans map to `1`/`0`, an empty list to `0`, and everything else
    /// to NaN. A single-element list coerces through its element's text
    /// form, so `[true]` is NaN while `[null]` is `0`. Text is parsed
    /// leniently: surrounding whitespace is ignored, empty text is `0`.
    #[must_use]
    pub fn coerce(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Bool(true) => 1.0,
            Self::Bool(false) | Self::Absent => 0.0,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    parse_decimal(trimmed).unwrap_or(f64::NAN)
                }
            }
            Self::List(items) => match items.as_slice() {
                [] | [Self::Absent] => 0.0,
                [Self::Bool(_) | Self::Object] => f64::NAN,
                [single] => single.coerce(),
                _ => f64::NAN,
            },
            Self::Object => f64::NAN,
        }
    }
}

/// Parses decimal text with optional sign, fraction and exponent.
///
/// Accepts `Infinity`/`-Infinity` but rejects Rust-specific spellings such
/// as `inf` or `nan`, so they cannot sneak past as numbers.
pub(crate) fn parse_decimal(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let numeric = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !numeric || !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    text.parse::<f64>().ok()
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "null"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(items) => write!(f, "[{} item(s)]", items.len()),
            Self::Object => write!(f, "{{object}}"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_f64().map_or(Self::Object, Self::Number),
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(_) => Self::Object,
        }
    }
}
