//! Tagged external representation of units
//!
//! Every polymorphic unit serializes to a JSON object carrying its concrete
//! variant under the reserved [`TAG_KEY`] alongside its configuration fields.
//! Nested delegates (a [`Not`](crate::predicate::Not)'s inner predicate, an
//! adapter's inner transform) carry their own tags recursively, so an
//! arbitrarily deep composition tree reconstructs bottom-up into exactly the
//! variants it was built from. Control values keep their runtime kind through
//! the round trip via [`Value`](crate::Value)'s wrapper tag.
//!
//! [`decode`] checks the incoming tag against the role's closed registry
//! before handing the representation to the deserializer, so an unknown or
//! missing tag surfaces as a precise [`ConfigError`] instead of a generic
//! parse failure. Reconstruction never guesses: any defect aborts the whole
//! tree.
//!
//! # Example
//!
//! ```rust
//! use sifter::{codec, IsEqual, Predicate};
//!
//! let unit: Predicate = IsEqual::new(5).into();
//! let json = codec::encode(&unit).unwrap();
//! assert_eq!(json, r#"{"class":"IsEqual","value":{"Int":5}}"#);
//!
//! let back: Predicate = codec::decode(&json).unwrap();
//! assert_eq!(back, unit);
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ConfigError;

/// The reserved key carrying a unit's variant tag in its representation.
pub const TAG_KEY: &str = "class";

/// A polymorphic role with a closed tag registry.
///
/// Implemented by each family of units that shares one tag namespace:
/// predicates, transforms, and the adapter. The registry is what makes
/// reconstruction fail loudly on a tag this crate does not recognize.
pub trait Tagged {
    /// The role name, used in error messages.
    const ROLE: &'static str;

    /// Every tag this role can reconstruct.
    const TAGS: &'static [&'static str];

    /// The tag of this instance's concrete variant.
    fn tag(&self) -> &'static str;
}

/// Serialize a unit to its tagged JSON representation.
pub fn encode<T>(unit: &T) -> Result<String, ConfigError>
where
    T: Tagged + Serialize,
{
    serde_json::to_string(unit).map_err(|e| ConfigError::Malformed {
        message: e.to_string(),
    })
}

/// Serialize a unit to a tagged [`serde_json::Value`] tree.
pub fn encode_value<T>(unit: &T) -> Result<serde_json::Value, ConfigError>
where
    T: Tagged + Serialize,
{
    serde_json::to_value(unit).map_err(|e| ConfigError::Malformed {
        message: e.to_string(),
    })
}

/// Reconstruct a unit from its tagged JSON representation.
///
/// Fails with [`ConfigError::MissingTag`] when the reserved key is absent,
/// [`ConfigError::UnknownTag`] when the tag is not in the role's registry,
/// and [`ConfigError::Malformed`] for any structural defect, including an
/// unrecognized tag on a nested delegate.
pub fn decode<T>(json: &str) -> Result<T, ConfigError>
where
    T: Tagged + DeserializeOwned,
{
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| ConfigError::Malformed {
        message: e.to_string(),
    })?;
    decode_value(value)
}

/// Reconstruct a unit from a tagged [`serde_json::Value`] tree.
pub fn decode_value<T>(value: serde_json::Value) -> Result<T, ConfigError>
where
    T: Tagged + DeserializeOwned,
{
    let tag = match value.get(TAG_KEY) {
        None => return Err(ConfigError::MissingTag { role: T::ROLE }),
        Some(serde_json::Value::String(tag)) => tag.clone(),
        Some(other) => {
            return Err(ConfigError::Malformed {
                message: format!("'{}' tag must be a string, got {}", TAG_KEY, other),
            })
        }
    };

    if !T::TAGS.contains(&tag.as_str()) {
        #[cfg(feature = "tracing")]
        tracing::debug!(role = T::ROLE, tag = %tag, "rejected unknown tag");
        return Err(ConfigError::UnknownTag {
            role: T::ROLE,
            tag,
        });
    }

    let unit = serde_json::from_value(value).map_err(|e| ConfigError::Malformed {
        message: e.to_string(),
    })?;

    #[cfg(feature = "tracing")]
    tracing::trace!(role = T::ROLE, tag = %tag, "reconstructed unit");

    Ok(unit)
}
