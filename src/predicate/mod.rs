//! Serializable predicate units
//!
//! Predicates in this module are **data, not code**: each unit is a small
//! struct carrying its own configuration, and [`Predicate`] is the closed
//! polymorphic role they all belong to. Because predicates are plain values,
//! they can be compared for structural equality, hashed, rendered for
//! diagnostics, serialized with their variant tag, and reconstructed from
//! configuration without losing their concrete type.
//!
//! # Example
//!
//! ```rust
//! use sifter::{IsEqual, Predicate, Value};
//!
//! // Build a composite predicate: not equal to 5.
//! let p: Predicate = IsEqual::new(5).into();
//! let p = p.not();
//!
//! assert!(!p.test(Some(&Value::from(5))));
//! assert!(p.test(Some(&Value::from(6))));
//!
//! // Two predicates with the same configuration are the same predicate.
//! let q: Predicate = IsEqual::new(5).into();
//! assert_eq!(p, q.not());
//! ```
//!
//! # Evaluation contract
//!
//! `test` takes `Option<&Value>` because pipeline inputs may be absent (a
//! missing property, an unset field). Evaluation is total: no input, of any
//! kind, makes `test` fail. Kind-incompatible inputs to ordered predicates
//! resolve to `false`.

mod combinators;
mod leaf;

pub use combinators::{And, Not, Or};
pub use leaf::{Exists, IsEqual, IsLessThan, IsLessThanBuilder, IsMoreThan, IsMoreThanBuilder};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec::Tagged;
use crate::value::Value;

/// The polymorphic predicate role: any unit that evaluates one input to a
/// boolean.
///
/// Serializes with the variant tag as a sibling `"class"` property, so a
/// reconstruction pass recovers the exact variant:
///
/// ```rust
/// use sifter::{codec, IsMoreThan, Predicate};
///
/// let p: Predicate = IsMoreThan::inclusive(3).into();
/// let json = codec::encode(&p).unwrap();
/// assert_eq!(json, r#"{"class":"IsMoreThan","value":{"Int":3},"or_equal_to":true}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum Predicate {
    /// Input equals a control value. See [`IsEqual`].
    IsEqual(IsEqual),
    /// Input exceeds a control value. See [`IsMoreThan`].
    IsMoreThan(IsMoreThan),
    /// Input falls below a control value. See [`IsLessThan`].
    IsLessThan(IsLessThan),
    /// Input is present. See [`Exists`].
    Exists(Exists),
    /// Negation of a wrapped predicate. See [`Not`].
    Not(Not),
    /// Conjunction over member predicates. See [`And`].
    And(And),
    /// Disjunction over member predicates. See [`Or`].
    Or(Or),
}

impl Predicate {
    /// Evaluate this predicate against an input.
    pub fn test(&self, input: Option<&Value>) -> bool {
        match self {
            Predicate::IsEqual(p) => p.test(input),
            Predicate::IsMoreThan(p) => p.test(input),
            Predicate::IsLessThan(p) => p.test(input),
            Predicate::Exists(p) => p.test(input),
            Predicate::Not(p) => p.test(input),
            Predicate::And(p) => p.test(input),
            Predicate::Or(p) => p.test(input),
        }
    }

    /// Wrap this predicate in a negation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sifter::{Exists, Predicate, Value};
    ///
    /// let p = Predicate::from(Exists::new()).not();
    /// assert!(p.test(None));
    /// assert!(!p.test(Some(&Value::from(1))));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Predicate {
        Not::new(self).into()
    }

    /// Combine with another predicate; both must accept the input.
    pub fn and(self, other: impl Into<Predicate>) -> Predicate {
        And::new(vec![self, other.into()]).into()
    }

    /// Combine with another predicate; either may accept the input.
    pub fn or(self, other: impl Into<Predicate>) -> Predicate {
        Or::new(vec![self, other.into()]).into()
    }
}

impl Tagged for Predicate {
    const ROLE: &'static str = "predicate";

    const TAGS: &'static [&'static str] = &[
        "IsEqual",
        "IsMoreThan",
        "IsLessThan",
        "Exists",
        "Not",
        "And",
        "Or",
    ];

    fn tag(&self) -> &'static str {
        match self {
            Predicate::IsEqual(_) => "IsEqual",
            Predicate::IsMoreThan(_) => "IsMoreThan",
            Predicate::IsLessThan(_) => "IsLessThan",
            Predicate::Exists(_) => "Exists",
            Predicate::Not(_) => "Not",
            Predicate::And(_) => "And",
            Predicate::Or(_) => "Or",
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::IsEqual(p) => p.fmt(f),
            Predicate::IsMoreThan(p) => p.fmt(f),
            Predicate::IsLessThan(p) => p.fmt(f),
            Predicate::Exists(p) => p.fmt(f),
            Predicate::Not(p) => p.fmt(f),
            Predicate::And(p) => p.fmt(f),
            Predicate::Or(p) => p.fmt(f),
        }
    }
}

impl From<IsEqual> for Predicate {
    fn from(p: IsEqual) -> Self {
        Predicate::IsEqual(p)
    }
}

impl From<IsMoreThan> for Predicate {
    fn from(p: IsMoreThan) -> Self {
        Predicate::IsMoreThan(p)
    }
}

impl From<IsLessThan> for Predicate {
    fn from(p: IsLessThan) -> Self {
        Predicate::IsLessThan(p)
    }
}

impl From<Exists> for Predicate {
    fn from(p: Exists) -> Self {
        Predicate::Exists(p)
    }
}

impl From<Not> for Predicate {
    fn from(p: Not) -> Self {
        Predicate::Not(p)
    }
}

impl From<And> for Predicate {
    fn from(p: And) -> Self {
        Predicate::And(p)
    }
}

impl From<Or> for Predicate {
    fn from(p: Or) -> Self {
        Predicate::Or(p)
    }
}
