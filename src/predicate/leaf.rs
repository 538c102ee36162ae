//! Leaf predicates
//!
//! Terminal predicates that evaluate one input against stored control data.
//! Each unit is equal to another iff their configurations are equal; no
//! identity state participates.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::ConfigError;
use crate::value::Value;

/// Checks that the input is equal to a control value.
///
/// An `IsEqual` with no control value matches only an absent input. Equality
/// is the control value's own: strict, same-kind `Value` equality.
///
/// # Example
///
/// ```rust
/// use sifter::{IsEqual, Value};
///
/// let p = IsEqual::new(5);
/// assert!(p.test(Some(&Value::from(5))));
/// assert!(!p.test(Some(&Value::from(6))));
/// assert!(!p.test(None));
///
/// let p = IsEqual::absent();
/// assert!(p.test(None));
/// assert!(!p.test(Some(&Value::from(5))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IsEqual {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

impl IsEqual {
    /// Create a predicate matching inputs equal to `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        IsEqual {
            value: Some(value.into()),
        }
    }

    /// Create a predicate matching only absent inputs.
    pub fn absent() -> Self {
        IsEqual { value: None }
    }

    /// The control value, if one is configured.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Evaluate against an input.
    pub fn test(&self, input: Option<&Value>) -> bool {
        match &self.value {
            None => input.is_none(),
            Some(control) => input == Some(control),
        }
    }
}

impl fmt::Display for IsEqual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "IsEqual(value={})", value),
            None => write!(f, "IsEqual(value=unset)"),
        }
    }
}

/// Checks that the input is more than a control value.
///
/// The `or_equal_to` flag switches from strict to inclusive comparison.
/// Absent inputs and inputs of a different kind than the control value are
/// rejected, not errors: ordering is delegated entirely to the control
/// value's same-kind comparison, and "no ordering" means "no match".
///
/// A control value is always present. Construct directly, or via
/// [`IsMoreThan::builder`] when configuration arrives field-by-field.
///
/// # Example
///
/// ```rust
/// use sifter::{IsMoreThan, Value};
///
/// let strict = IsMoreThan::new(5);
/// assert!(strict.test(Some(&Value::from(6))));
/// assert!(!strict.test(Some(&Value::from(5))));
///
/// let inclusive = IsMoreThan::inclusive(5);
/// assert!(inclusive.test(Some(&Value::from(5))));
///
/// // Kind-incompatible input rejects instead of failing.
/// assert!(!strict.test(Some(&Value::from("x"))));
/// assert!(!strict.test(None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsMoreThan {
    value: Value,
    #[serde(default)]
    or_equal_to: bool,
}

impl IsMoreThan {
    /// Create a strict `input > value` predicate.
    pub fn new(value: impl Into<Value>) -> Self {
        IsMoreThan {
            value: value.into(),
            or_equal_to: false,
        }
    }

    /// Create an inclusive `input >= value` predicate.
    pub fn inclusive(value: impl Into<Value>) -> Self {
        IsMoreThan {
            value: value.into(),
            or_equal_to: true,
        }
    }

    /// Start building an `IsMoreThan` from parts.
    pub fn builder() -> IsMoreThanBuilder {
        IsMoreThanBuilder::default()
    }

    /// The control value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether comparison is inclusive.
    pub fn or_equal_to(&self) -> bool {
        self.or_equal_to
    }

    /// Evaluate against an input.
    pub fn test(&self, input: Option<&Value>) -> bool {
        ordered_test(&self.value, self.or_equal_to, Ordering::Less, input)
    }
}

impl fmt::Display for IsMoreThan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IsMoreThan(value={}, or_equal_to={})",
            self.value, self.or_equal_to
        )
    }
}

/// Two-phase construction for [`IsMoreThan`].
///
/// Materialization fails if the control value was never supplied:
///
/// ```rust
/// use sifter::{ConfigError, IsMoreThan};
///
/// let p = IsMoreThan::builder().value(3).or_equal_to(true).build().unwrap();
/// assert_eq!(p, IsMoreThan::inclusive(3));
///
/// let err = IsMoreThan::builder().or_equal_to(true).build().unwrap_err();
/// assert_eq!(err, ConfigError::MissingField { unit: "IsMoreThan", field: "value" });
/// ```
#[derive(Debug, Default)]
pub struct IsMoreThanBuilder {
    value: Option<Value>,
    or_equal_to: bool,
}

impl IsMoreThanBuilder {
    /// Set the control value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the inclusive-comparison flag.
    pub fn or_equal_to(mut self, or_equal_to: bool) -> Self {
        self.or_equal_to = or_equal_to;
        self
    }

    /// Materialize the predicate.
    pub fn build(self) -> Result<IsMoreThan, ConfigError> {
        let value = self.value.ok_or(ConfigError::MissingField {
            unit: "IsMoreThan",
            field: "value",
        })?;
        Ok(IsMoreThan {
            value,
            or_equal_to: self.or_equal_to,
        })
    }
}

/// Checks that the input is less than a control value.
///
/// Mirror of [`IsMoreThan`]: `or_equal_to` switches to `input <= value`, and
/// absent or kind-incompatible inputs are rejected.
///
/// # Example
///
/// ```rust
/// use sifter::{IsLessThan, Value};
///
/// let p = IsLessThan::new(5);
/// assert!(p.test(Some(&Value::from(4))));
/// assert!(!p.test(Some(&Value::from(5))));
/// assert!(IsLessThan::inclusive(5).test(Some(&Value::from(5))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsLessThan {
    value: Value,
    #[serde(default)]
    or_equal_to: bool,
}

impl IsLessThan {
    /// Create a strict `input < value` predicate.
    pub fn new(value: impl Into<Value>) -> Self {
        IsLessThan {
            value: value.into(),
            or_equal_to: false,
        }
    }

    /// Create an inclusive `input <= value` predicate.
    pub fn inclusive(value: impl Into<Value>) -> Self {
        IsLessThan {
            value: value.into(),
            or_equal_to: true,
        }
    }

    /// Start building an `IsLessThan` from parts.
    pub fn builder() -> IsLessThanBuilder {
        IsLessThanBuilder::default()
    }

    /// The control value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether comparison is inclusive.
    pub fn or_equal_to(&self) -> bool {
        self.or_equal_to
    }

    /// Evaluate against an input.
    pub fn test(&self, input: Option<&Value>) -> bool {
        ordered_test(&self.value, self.or_equal_to, Ordering::Greater, input)
    }
}

impl fmt::Display for IsLessThan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IsLessThan(value={}, or_equal_to={})",
            self.value, self.or_equal_to
        )
    }
}

/// Two-phase construction for [`IsLessThan`].
#[derive(Debug, Default)]
pub struct IsLessThanBuilder {
    value: Option<Value>,
    or_equal_to: bool,
}

impl IsLessThanBuilder {
    /// Set the control value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the inclusive-comparison flag.
    pub fn or_equal_to(mut self, or_equal_to: bool) -> Self {
        self.or_equal_to = or_equal_to;
        self
    }

    /// Materialize the predicate.
    pub fn build(self) -> Result<IsLessThan, ConfigError> {
        let value = self.value.ok_or(ConfigError::MissingField {
            unit: "IsLessThan",
            field: "value",
        })?;
        Ok(IsLessThan {
            value,
            or_equal_to: self.or_equal_to,
        })
    }
}

/// Checks that the input is present.
///
/// # Example
///
/// ```rust
/// use sifter::{Exists, Value};
///
/// let p = Exists::new();
/// assert!(p.test(Some(&Value::from(0))));
/// assert!(!p.test(None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Exists {}

impl Exists {
    /// Create the presence predicate.
    pub fn new() -> Self {
        Exists {}
    }

    /// Evaluate against an input.
    pub fn test(&self, input: Option<&Value>) -> bool {
        input.is_some()
    }
}

impl fmt::Display for Exists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exists")
    }
}

// Shared ordered-comparison core. `want` is the ordering of control relative
// to input that counts as a match: Less for IsMoreThan (control < input),
// Greater for IsLessThan.
fn ordered_test(control: &Value, or_equal_to: bool, want: Ordering, input: Option<&Value>) -> bool {
    let Some(input) = input else {
        return false;
    };
    match control.compare(input) {
        Some(ord) => ord == want || (or_equal_to && ord == Ordering::Equal),
        None => false,
    }
}
