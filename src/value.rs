//! Value - loosely typed sequence element.
//!
//! Several operations work over sequences that mix element kinds (numbers,
//! strings, booleans, nulls and nested arrays side by side). [`Value`] models
//! one such element and carries the three comparisons those operations need:
//!
//! - `PartialEq`: strict equality. Different variants never compare equal,
//!   `NaN != NaN` and `0 == -0`.
//! - [`Value::same_value_zero`]: membership equality, where `NaN` matches
//!   `NaN`.
//! - [`Value::is_truthy`]: truthiness coercion.
//!
//! `Display` renders the canonical string form used when joining.
//!
//! # Examples
//!
//! ```
//! use seqkit::Value;
//!
//! let nan = Value::from(f64::NAN);
//! assert_ne!(nan, nan.clone());
//! assert!(nan.same_value_zero(&Value::from(f64::NAN)));
//! assert!(!Value::from("").is_truthy());
//! assert_eq!(Value::from(3.0).to_string(), "3");
//! ```

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::{Nested, Result, SeqKitError};

/// A single loosely typed element.
///
/// Serializes as an untagged JSON value. `Undefined` and non-finite numbers
/// are written as `null`; `null` always reads back as [`Value::Null`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit absence of a value
    Null,
    /// Missing value
    #[default]
    Undefined,
    /// Boolean
    Bool(bool),
    /// Double precision number
    Number(#[serde(serialize_with = "serialize_number")] f64),
    /// String
    Str(String),
    /// Nested array of values
    Array(Vec<Value>),
}

impl Value {
    /// Returns `true` unless the value is one of `undefined`, `null`,
    /// `false`, `0`, `-0`, `NaN` or the empty string.
    ///
    /// Arrays are always truthy, including empty ones.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !(*n == 0.0 || n.is_nan()),
            Value::Str(s) => !s.is_empty(),
            Value::Array(_) => true,
        }
    }

    /// Equality used for membership tests: identical to `==` except that
    /// `NaN` matches `NaN`.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => self == other,
        }
    }

    /// Returns the number if this is a [`Value::Number`].
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Canonical string form of the value.
    ///
    /// `undefined` and `null` render as the empty string and arrays render
    /// as the comma-join of their elements.
    pub fn to_js_string(&self) -> String {
        self.to_string()
    }

    /// Converts arrays into [`Nested::List`] levels and everything else
    /// into [`Nested::Item`] leaves.
    pub fn into_nested(self) -> Nested<Value> {
        match self {
            Value::Array(items) => {
                Nested::List(items.into_iter().map(Value::into_nested).collect())
            }
            other => Nested::Item(other),
        }
    }
}

/// Largest integer every `f64` below it represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Integral numbers go out as JSON integers (`2`, not `2.0`).
fn serialize_number<S>(n: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        serializer.serialize_i64(*n as i64)
    } else {
        serializer.serialize_f64(*n)
    }
}

/// Number formatting: integral values print without a fraction, very large
/// and very small magnitudes switch to exponent form (`1e+21`, `1e-7`).
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.abs() >= 1e21 {
        let exp = format!("{:e}", n);
        f.write_str(&exp.replacen('e', "e+", 1))
    } else if n.abs() < 1e-6 {
        write!(f, "{:e}", n)
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined | Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => fmt_number(*n, f),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = SeqKitError;

    /// JSON objects have no `Value` counterpart and are rejected.
    fn try_from(json: serde_json::Value) -> Result<Self> {
        Ok(match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            serde_json::Value::Object(_) => {
                return Err(SeqKitError::InvalidParameter(
                    "objects are not sequence elements".into(),
                ))
            }
        })
    }
}
