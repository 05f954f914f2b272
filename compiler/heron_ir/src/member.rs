//! Members: structure fields, union alternatives, streaming members.
//!
//! Members carry two names. `name` is the display name used for the
//! generated Scala member and follows member casing; `real_name` is the name
//! the member had in the source model and is what goes on the wire, so no
//! pass may alter it.

use crate::{Hint, Product, Type};

/// Presence modifier of a structure field.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldModifier {
    /// The field must always be present.
    Required,
    /// The field is optional; absent values decode to `None`.
    Optional,
    /// The field has a default value (carried by a `Hint::Default`).
    Default,
}

/// A field of a structure or operation parameter list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Generated member name (member-cased).
    pub name: String,
    /// Source-model name, used as the wire key. Never rewritten.
    pub real_name: String,
    pub tpe: Type,
    pub modifier: FieldModifier,
    pub hints: Vec<Hint>,
}

impl Field {
    /// Create a required field whose display name equals its wire name.
    #[inline]
    pub fn required(name: impl Into<String>, tpe: Type) -> Self {
        let name = name.into();
        Field {
            real_name: name.clone(),
            name,
            tpe,
            modifier: FieldModifier::Required,
            hints: Vec::new(),
        }
    }
}

/// The payload of a union alternative: either a reference to some type or a
/// product declared inline in the union.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum AltKind {
    Type(Type),
    Product(Product),
}

/// One alternative (case) of a union.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    /// Generated case member name (member-cased).
    pub name: String,
    /// Source-model name, used as the wire discriminator. Never rewritten.
    pub real_name: String,
    pub member: AltKind,
    pub hints: Vec<Hint>,
}

/// A streamed input or output of an operation.
///
/// Streaming member names are fixed by the streaming wire convention and do
/// not go through member casing or keyword protection.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamingField {
    pub name: String,
    pub tpe: Type,
    pub hints: Vec<Hint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Prim;

    #[test]
    fn required_field_shares_display_and_wire_name() {
        let field = Field::required("temperature", Type::Primitive(Prim::Double));
        assert_eq!(field.name, "temperature");
        assert_eq!(field.real_name, "temperature");
        assert_eq!(field.modifier, FieldModifier::Required);
        assert!(field.hints.is_empty());
    }
}
