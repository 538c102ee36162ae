//! The stateless output adapter

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec::Tagged;
use crate::error::ApplyError;
use crate::function::Function;
use crate::value::Value;

/// A two-argument transform that ignores its first argument.
///
/// Pipeline reduction steps thread accumulator state through a sequence of
/// `(state, output) -> result` calls. This adapter satisfies that calling
/// convention for transforms that only need the current output: the state
/// parameter is generic and unconstrained, so the implementation cannot
/// observe it, let alone depend on it. With no inner transform configured the
/// output passes through unchanged.
///
/// # Example
///
/// ```rust
/// use sifter::{Function, StatelessOutputAdapter, Value};
///
/// // Pass-through: any state, output unchanged.
/// let identity = StatelessOutputAdapter::passthrough();
/// assert_eq!(
///     identity.apply(&"ignored", Value::from(5)).unwrap(),
///     Value::from(5)
/// );
///
/// // With an inner transform, the state still plays no role.
/// let upper = StatelessOutputAdapter::new(Function::ToUpperCase);
/// assert_eq!(
///     upper.apply(&42, Value::from("ab")).unwrap(),
///     Value::from("AB")
/// );
/// assert_eq!(
///     upper.apply(&(), Value::from("ab")).unwrap(),
///     Value::from("AB")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "class")]
pub struct StatelessOutputAdapter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    adapter: Option<Box<Function>>,
}

impl StatelessOutputAdapter {
    /// Create an adapter applying `adapter` to the output.
    pub fn new(adapter: Function) -> Self {
        StatelessOutputAdapter {
            adapter: Some(Box::new(adapter)),
        }
    }

    /// Create an adapter that returns the output unchanged.
    pub fn passthrough() -> Self {
        StatelessOutputAdapter { adapter: None }
    }

    /// The inner transform, if one is configured.
    pub fn adapter(&self) -> Option<&Function> {
        self.adapter.as_deref()
    }

    /// Adapt an output, discarding the state.
    ///
    /// Fails only when the inner transform fails; the pass-through form is
    /// infallible in practice.
    pub fn apply<S>(&self, _state: &S, output: Value) -> Result<Value, ApplyError> {
        match &self.adapter {
            Some(f) => f.apply(&output),
            None => Ok(output),
        }
    }
}

impl Tagged for StatelessOutputAdapter {
    const ROLE: &'static str = "adapter";

    const TAGS: &'static [&'static str] = &["StatelessOutputAdapter"];

    fn tag(&self) -> &'static str {
        "StatelessOutputAdapter"
    }
}

impl fmt::Display for StatelessOutputAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.adapter {
            Some(inner) => write!(f, "StatelessOutputAdapter(adapter={})", inner),
            None => write!(f, "StatelessOutputAdapter(adapter=unset)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_returns_output_unchanged() {
        let adapter = StatelessOutputAdapter::passthrough();
        for output in [Value::from(5), Value::from("ab"), Value::from(true)] {
            assert_eq!(
                adapter.apply(&"state", output.clone()).unwrap(),
                output
            );
        }
    }

    #[test]
    fn test_state_never_influences_result() {
        let adapter = StatelessOutputAdapter::new(Function::ToUpperCase);
        let expected = Value::from("AB");
        assert_eq!(adapter.apply(&1, Value::from("ab")).unwrap(), expected);
        assert_eq!(adapter.apply(&"x", Value::from("ab")).unwrap(), expected);
        assert_eq!(
            adapter
                .apply(&vec![Value::from(9)], Value::from("ab"))
                .unwrap(),
            expected
        );
    }

    #[test]
    fn test_inner_transform_failures_propagate() {
        let adapter = StatelessOutputAdapter::new(Function::ToUpperCase);
        assert!(adapter.apply(&(), Value::from(5)).is_err());
    }

    #[test]
    fn test_default_is_passthrough() {
        assert_eq!(
            StatelessOutputAdapter::default(),
            StatelessOutputAdapter::passthrough()
        );
    }

    #[test]
    fn test_equality_tracks_configuration() {
        assert_eq!(
            StatelessOutputAdapter::new(Function::ToUpperCase),
            StatelessOutputAdapter::new(Function::ToUpperCase)
        );
        assert_ne!(
            StatelessOutputAdapter::new(Function::ToUpperCase),
            StatelessOutputAdapter::new(Function::ToLowerCase)
        );
        assert_ne!(
            StatelessOutputAdapter::new(Function::ToUpperCase),
            StatelessOutputAdapter::passthrough()
        );
    }

    #[test]
    fn test_tagged_representation() {
        let json = serde_json::to_string(&StatelessOutputAdapter::passthrough()).unwrap();
        assert_eq!(json, r#"{"class":"StatelessOutputAdapter"}"#);

        let json =
            serde_json::to_string(&StatelessOutputAdapter::new(Function::Length)).unwrap();
        assert_eq!(
            json,
            r#"{"class":"StatelessOutputAdapter","adapter":{"class":"Length"}}"#
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            StatelessOutputAdapter::new(Function::ToText).to_string(),
            "StatelessOutputAdapter(adapter=ToText)"
        );
    }
}
