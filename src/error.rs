//! Error types for reconstruction and transform evaluation
//!
//! Two families of failures exist in this crate:
//!
//! - [`ConfigError`]: a unit could not be reconstructed from its tagged
//!   external representation, or a builder was asked to materialize a unit
//!   with a required field unset. These abort reconstruction of the whole
//!   tree; no partially-built unit is ever returned.
//! - [`ApplyError`]: a transform was applied to a value whose kind it does
//!   not support, or checked arithmetic overflowed.
//!
//! Predicate evaluation never errors. A kind-incompatible input to an ordered
//! predicate resolves to `false`, keeping `test` total over all inputs.

use std::fmt;

/// Error reconstructing a unit from its tagged representation, or
/// materializing a unit from a builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The representation has no tag under the reserved key.
    MissingTag {
        /// The polymorphic role that was being reconstructed.
        role: &'static str,
    },
    /// The tag names a variant this crate does not recognize.
    UnknownTag {
        /// The polymorphic role that was being reconstructed.
        role: &'static str,
        /// The unrecognized tag as found in the representation.
        tag: String,
    },
    /// A builder was asked to materialize a unit without a required field.
    MissingField {
        /// The unit being built.
        unit: &'static str,
        /// The unset field.
        field: &'static str,
    },
    /// The representation is structurally invalid: not an object, a required
    /// field is missing, a field has the wrong shape, or a nested delegate
    /// carries an unrecognized tag.
    Malformed {
        /// Description of the defect, from the deserializer.
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingTag { role } => {
                write!(f, "{} representation has no 'class' tag", role)
            }
            ConfigError::UnknownTag { role, tag } => {
                write!(f, "unknown {} tag: '{}'", role, tag)
            }
            ConfigError::MissingField { unit, field } => {
                write!(f, "{} requires field '{}'", unit, field)
            }
            ConfigError::Malformed { message } => {
                write!(f, "malformed representation: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error applying a transform to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// The input's kind is not supported by the transform.
    WrongKind {
        /// The transform that rejected the input.
        function: &'static str,
        /// The kind the input actually had.
        got: &'static str,
    },
    /// Checked arithmetic overflowed.
    Overflow {
        /// Description of the overflowing operation.
        message: String,
    },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::WrongKind { function, got } => {
                write!(f, "{} cannot be applied to {} values", function, got)
            }
            ApplyError::Overflow { message } => {
                write!(f, "arithmetic overflow: {}", message)
            }
        }
    }
}

impl std::error::Error for ApplyError {}
