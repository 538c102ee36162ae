//! Dynamic runtime values
//!
//! Predicates and transforms in this crate are evaluated against values whose
//! type is only known at runtime. [`Value`] is the closed sum of the kinds the
//! crate supports, so evaluation contracts stay total: a unit confronted with
//! a kind it cannot handle rejects or errors instead of crashing.
//!
//! Ordering is only defined between values of the same kind. Comparing an
//! `Int` with a `Text` yields no ordering at all, which ordered predicates
//! treat as a mismatch rather than an error.
//!
//! Decimals are exact [`rust_decimal::Decimal`] values, never floats, so every
//! `Value` supports structural equality and hashing and survives a
//! serialization round trip unchanged.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use sifter::Value;
//!
//! let five = Value::from(5);
//! assert_eq!(five.kind(), "Int");
//! assert_eq!(five.compare(&Value::from(7)), Some(Ordering::Less));
//!
//! // Cross-kind comparison has no ordering.
//! assert_eq!(five.compare(&Value::from("seven")), None);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A runtime value of one of the supported kinds.
///
/// Serializes with the kind as an external wrapper tag, so the runtime kind
/// survives a round trip through configuration:
///
/// ```rust
/// use sifter::Value;
///
/// let json = serde_json::to_string(&Value::from(5)).unwrap();
/// assert_eq!(json, r#"{"Int":5}"#);
///
/// let back: Value = serde_json::from_str(&json).unwrap();
/// assert_eq!(back, Value::from(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// An exact decimal number.
    Decimal(Decimal),
    /// A UTF-8 string.
    Text(String),
    /// A list of values, possibly of mixed kinds.
    List(Vec<Value>),
}

impl Value {
    /// The name of this value's kind, for diagnostics and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Decimal(_) => "Decimal",
            Value::Text(_) => "Text",
            Value::List(_) => "List",
        }
    }

    /// Compare two values of the same kind.
    ///
    /// Returns `None` when the kinds differ or when the kind has no ordering
    /// (`List` values are equal-comparable but not ordered). Ordered
    /// predicates treat `None` as "input does not match".
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use sifter::Value;
    ///
    /// assert_eq!(Value::from("a").compare(&Value::from("b")), Some(Ordering::Less));
    /// assert_eq!(Value::from(1).compare(&Value::from(true)), None);
    /// assert_eq!(Value::from(vec![]).compare(&Value::from(vec![])), None);
    /// ```
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Text(s) => write!(f, "{}", s),
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
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
