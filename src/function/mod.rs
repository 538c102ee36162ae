//! Serializable transform units
//!
//! Transforms mirror the predicate role for value-to-value mappings: each
//! unit is configuration-only data, compares structurally, and serializes
//! with its variant tag. [`Function`] is the closed polymorphic role;
//! [`StatelessOutputAdapter`] lifts an optional `Function` into the
//! two-argument calling convention of pipeline reduction steps.
//!
//! Unlike predicate evaluation, transform application can fail: a transform
//! confronted with a kind it does not support returns an
//! [`ApplyError`](crate::ApplyError) instead of guessing.
//!
//! # Example
//!
//! ```rust
//! use sifter::{Function, Value};
//!
//! let upper = Function::ToUpperCase;
//! assert_eq!(upper.apply(&Value::from("ab")).unwrap(), Value::from("AB"));
//! assert!(upper.apply(&Value::from(5)).is_err());
//! ```

mod adapter;

pub use adapter::StatelessOutputAdapter;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec::Tagged;
use crate::error::ApplyError;
use crate::value::Value;

/// The polymorphic transform role: a single-input mapping from one value to
/// another.
///
/// Serializes with the variant tag as a sibling `"class"` property, like
/// predicates:
///
/// ```rust
/// use sifter::{codec, Function};
///
/// let json = codec::encode(&Function::MultiplyBy { by: 3 }).unwrap();
/// assert_eq!(json, r#"{"class":"MultiplyBy","by":3}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum Function {
    /// Uppercase a `Text` value.
    ToUpperCase,
    /// Lowercase a `Text` value.
    ToLowerCase,
    /// Length of a `Text` (in chars) or `List` (in elements), as an `Int`.
    Length,
    /// Render any value as `Text`. Total.
    ToText,
    /// Multiply an `Int` or `Decimal` by an integer factor, checked.
    MultiplyBy {
        /// The constant factor.
        by: i64,
    },
}

impl Function {
    /// Apply this transform to a value.
    pub fn apply(&self, input: &Value) -> Result<Value, ApplyError> {
        match self {
            Function::ToUpperCase => match input {
                Value::Text(s) => Ok(Value::Text(s.to_uppercase())),
                other => Err(wrong_kind("ToUpperCase", other)),
            },
            Function::ToLowerCase => match input {
                Value::Text(s) => Ok(Value::Text(s.to_lowercase())),
                other => Err(wrong_kind("ToLowerCase", other)),
            },
            Function::Length => match input {
                Value::Text(s) => Ok(Value::Int(s.chars().count() as i64)),
                Value::List(items) => Ok(Value::Int(items.len() as i64)),
                other => Err(wrong_kind("Length", other)),
            },
            Function::ToText => Ok(Value::Text(input.to_string())),
            Function::MultiplyBy { by } => match input {
                Value::Int(i) => i.checked_mul(*by).map(Value::Int).ok_or_else(|| {
                    ApplyError::Overflow {
                        message: format!("{} * {}", i, by),
                    }
                }),
                Value::Decimal(d) => d
                    .checked_mul(rust_decimal::Decimal::from(*by))
                    .map(Value::Decimal)
                    .ok_or_else(|| ApplyError::Overflow {
                        message: format!("{} * {}", d, by),
                    }),
                other => Err(wrong_kind("MultiplyBy", other)),
            },
        }
    }
}

fn wrong_kind(function: &'static str, got: &Value) -> ApplyError {
    ApplyError::WrongKind {
        function,
        got: got.kind(),
    }
}

impl Tagged for Function {
    const ROLE: &'static str = "function";

    const TAGS: &'static [&'static str] = &[
        "ToUpperCase",
        "ToLowerCase",
        "Length",
        "ToText",
        "MultiplyBy",
    ];

    fn tag(&self) -> &'static str {
        match self {
            Function::ToUpperCase => "ToUpperCase",
            Function::ToLowerCase => "ToLowerCase",
            Function::Length => "Length",
            Function::ToText => "ToText",
            Function::MultiplyBy { .. } => "MultiplyBy",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::MultiplyBy { by } => write!(f, "MultiplyBy(by={})", by),
            other => write!(f, "{}", other.tag()),
        }
    }
}
