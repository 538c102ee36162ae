//! Logical combinators
//!
//! Combinators wrap other predicates to build composite behavior. Members are
//! full polymorphic [`Predicate`]s, so composition trees nest arbitrarily and
//! serialize with every level carrying its own variant tag.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::predicate::Predicate;
use crate::value::Value;

/// Returns the inverse of the wrapped predicate.
///
/// An unset inner predicate is treated as "always false", and its negation is
/// therefore also false, not true. This is a deliberate safe default for
/// partially-populated configuration, not an oversight.
///
/// # Example
///
/// ```rust
/// use sifter::{IsEqual, Not, Value};
///
/// let p = Not::new(IsEqual::new(5));
/// assert!(!p.test(Some(&Value::from(5))));
/// assert!(p.test(Some(&Value::from(6))));
///
/// // Unset inner predicate: always false.
/// assert!(!Not::empty().test(Some(&Value::from(5))));
/// assert!(!Not::empty().test(None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Not {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    predicate: Option<Box<Predicate>>,
}

impl Not {
    /// Wrap a predicate.
    pub fn new(predicate: impl Into<Predicate>) -> Self {
        Not {
            predicate: Some(Box::new(predicate.into())),
        }
    }

    /// Create a negation with no inner predicate.
    pub fn empty() -> Self {
        Not { predicate: None }
    }

    /// The wrapped predicate, if one is configured.
    pub fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_deref()
    }

    /// Evaluate against an input.
    pub fn test(&self, input: Option<&Value>) -> bool {
        match &self.predicate {
            Some(p) => !p.test(input),
            None => false,
        }
    }
}

impl fmt::Display for Not {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.predicate {
            Some(p) => write!(f, "Not({})", p),
            None => write!(f, "Not(unset)"),
        }
    }
}

/// True iff every member predicate accepts the input.
///
/// Vacuously true when there are no members.
///
/// # Example
///
/// ```rust
/// use sifter::{And, IsLessThan, IsMoreThan, Value};
///
/// let p = And::new(vec![IsMoreThan::new(0).into(), IsLessThan::new(10).into()]);
/// assert!(p.test(Some(&Value::from(5))));
/// assert!(!p.test(Some(&Value::from(10))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct And {
    #[serde(default)]
    predicates: Vec<Predicate>,
}

impl And {
    /// Create a conjunction over member predicates.
    pub fn new(predicates: Vec<Predicate>) -> Self {
        And { predicates }
    }

    /// The member predicates.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Evaluate against an input.
    pub fn test(&self, input: Option<&Value>) -> bool {
        self.predicates.iter().all(|p| p.test(input))
    }
}

impl fmt::Display for And {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "And(")?;
        for (i, p) in self.predicates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, ")")
    }
}

/// True iff any member predicate accepts the input.
///
/// Vacuously false when there are no members.
///
/// # Example
///
/// ```rust
/// use sifter::{IsEqual, Or, Value};
///
/// let p = Or::new(vec![IsEqual::new(1).into(), IsEqual::new(5).into()]);
/// assert!(p.test(Some(&Value::from(5))));
/// assert!(!p.test(Some(&Value::from(2))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Or {
    #[serde(default)]
    predicates: Vec<Predicate>,
}

impl Or {
    /// Create a disjunction over member predicates.
    pub fn new(predicates: Vec<Predicate>) -> Self {
        Or { predicates }
    }

    /// The member predicates.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Evaluate against an input.
    pub fn test(&self, input: Option<&Value>) -> bool {
        self.predicates.iter().any(|p| p.test(input))
    }
}

impl fmt::Display for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Or(")?;
        for (i, p) in self.predicates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{Exists, IsEqual, IsLessThan, IsMoreThan};

    #[test]
    fn test_not_inverts() {
        let p = Not::new(IsEqual::new(5));
        assert!(!p.test(Some(&Value::from(5))));
        assert!(p.test(Some(&Value::from(6))));
    }

    #[test]
    fn test_not_with_unset_inner_is_false() {
        let p = Not::empty();
        assert!(!p.test(Some(&Value::from(5))));
        assert!(!p.test(None));
        assert_eq!(Not::default(), Not::empty());
    }

    #[test]
    fn test_not_over_absent_input() {
        // Inner rejects absent input, so the negation accepts it.
        let p = Not::new(IsMoreThan::new(5));
        assert!(p.test(None));
    }

    #[test]
    fn test_and_requires_all_members() {
        let p = And::new(vec![
            IsMoreThan::new(0).into(),
            IsLessThan::new(10).into(),
        ]);
        assert!(p.test(Some(&Value::from(5))));
        assert!(!p.test(Some(&Value::from(0))));
        assert!(!p.test(Some(&Value::from(10))));
        assert!(!p.test(None));
    }

    #[test]
    fn test_and_is_vacuously_true() {
        assert!(And::new(vec![]).test(Some(&Value::from(1))));
        assert!(And::new(vec![]).test(None));
    }

    #[test]
    fn test_or_requires_any_member() {
        let p = Or::new(vec![IsEqual::new(1).into(), IsEqual::new(5).into()]);
        assert!(p.test(Some(&Value::from(1))));
        assert!(p.test(Some(&Value::from(5))));
        assert!(!p.test(Some(&Value::from(3))));
    }

    #[test]
    fn test_or_is_vacuously_false() {
        assert!(!Or::new(vec![]).test(Some(&Value::from(1))));
        assert!(!Or::new(vec![]).test(None));
    }

    #[test]
    fn test_deep_nesting() {
        // not(exists or (x > 3 and x < 7))
        let inner = Predicate::from(IsMoreThan::new(3)).and(IsLessThan::new(7));
        let p = Predicate::from(Exists::new()).or(inner).not();
        assert!(!p.test(Some(&Value::from(5))));
        assert!(!p.test(Some(&Value::from(9))));
        assert!(p.test(None));
    }

    #[test]
    fn test_combinator_equality_is_structural() {
        let a = Not::new(IsEqual::new(5));
        let b = Not::new(IsEqual::new(5));
        assert_eq!(a, b);
        assert_ne!(a, Not::new(IsEqual::new(6)));
        assert_ne!(a, Not::empty());
    }

    #[test]
    fn test_display() {
        let p = And::new(vec![
            IsMoreThan::new(0).into(),
            Not::new(IsEqual::new(5)).into(),
        ]);
        assert_eq!(
            p.to_string(),
            "And(IsMoreThan(value=0, or_equal_to=false), Not(IsEqual(value=5)))"
        );
        assert_eq!(Or::new(vec![]).to_string(), "Or()");
    }
}
