//! Stable shape identity.
//!
//! A `ShapeId` is the namespace-qualified name a shape had in the source
//! model. It is the key used for reference resolution and diagnostics, and
//! it survives every transformation unchanged: passes that rewrite display
//! names (collision avoidance in particular) must leave the `ShapeId` alone
//! so downstream tooling can still correlate output with the source model.

use std::fmt;

/// Namespace-qualified identity of a shape in the source model.
///
/// Rendered as `namespace#name`, e.g. `example.weather#GetForecast`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeId {
    pub namespace: String,
    pub name: String,
}

impl ShapeId {
    /// Create a shape id from its parts.
    #[inline]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        ShapeId {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_namespace_hash_name() {
        let id = ShapeId::new("example.weather", "GetForecast");
        assert_eq!(id.to_string(), "example.weather#GetForecast");
    }

    #[test]
    fn equality_is_structural() {
        let a = ShapeId::new("ns", "Shape");
        let b = ShapeId::new("ns", "Shape");
        let c = ShapeId::new("ns", "Other");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
