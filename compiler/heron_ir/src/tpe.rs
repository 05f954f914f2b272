//! Type expressions.
//!
//! `Type` is the recursive type-expression tree attached to members,
//! operation signatures, and alias targets. References to declarations are
//! by name (`TypeRef`), never by pointer, so a type expression can be moved,
//! cloned, and rewritten without touching the declaration it points at.

use crate::Hint;

/// A by-name reference to a declaration.
///
/// The name here is the *display* name and must be kept consistent with the
/// declaration it points at: a pass that rewrites declaration names has to
/// rewrite every `TypeRef` in the same unit in lockstep.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRef {
    pub namespace: String,
    pub name: String,
}

impl TypeRef {
    #[inline]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeRef {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

/// The collection container a `Type::Collection` compiles to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum CollectionKind {
    List,
    Set,
    Vector,
    IndexedSeq,
}

/// Primitive types of the interface model.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Prim {
    Unit,
    Bool,
    Str,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    BigInt,
    BigDecimal,
    Blob,
    Timestamp,
    Uuid,
    Document,
}

/// A type expression.
///
/// `Ref` and `Alias` carry display names that point at declarations in the
/// same compilation unit; everything else is structural.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// A homogeneous collection: `list<T>`, `set<T>`, ...
    Collection {
        kind: CollectionKind,
        member: Box<Type>,
        /// Hints attached to the member position (e.g. member constraints).
        member_hints: Vec<Hint>,
    },

    /// A map with hints attached to the key and value positions.
    Map {
        key: Box<Type>,
        key_hints: Vec<Hint>,
        value: Box<Type>,
        value_hints: Vec<Hint>,
    },

    /// A by-name reference to a declaration.
    Ref(TypeRef),

    /// An inlined alias node: name plus the target it stands for.
    ///
    /// `is_unwrapped` records whether the emitter may elide the wrapper type
    /// and use `tpe` directly at use sites.
    Alias {
        namespace: String,
        name: String,
        tpe: Box<Type>,
        is_unwrapped: bool,
    },

    /// A primitive type.
    Primitive(Prim),

    /// A type provided by the surrounding host ecosystem rather than
    /// generated from the model.
    ///
    /// `fully_qualified` and `provider_import` name entities in that
    /// ecosystem and are never rewritten; only the display `name` takes part
    /// in collision avoidance.
    External {
        name: String,
        fully_qualified: String,
        type_params: Vec<Type>,
        provider_import: Option<String>,
        underlying: Box<Type>,
        /// The native hint the external type was derived from.
        refinement: Box<Hint>,
    },

    /// An optional value of the underlying type.
    Nullable(Box<Type>),
}

impl Type {
    /// Create a by-name reference.
    #[inline]
    pub fn reference(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Type::Ref(TypeRef::new(namespace, name))
    }

    /// Create a collection type with no member hints.
    #[inline]
    pub fn collection(kind: CollectionKind, member: Type) -> Self {
        Type::Collection {
            kind,
            member: Box::new(member),
            member_hints: Vec::new(),
        }
    }

    /// Create a map type with no key/value hints.
    #[inline]
    pub fn map(key: Type, value: Type) -> Self {
        Type::Map {
            key: Box::new(key),
            key_hints: Vec::new(),
            value: Box::new(value),
            value_hints: Vec::new(),
        }
    }

    /// Wrap a type in `Nullable`.
    #[inline]
    pub fn nullable(tpe: Type) -> Self {
        Type::Nullable(Box::new(tpe))
    }

    /// Check if this is a primitive type.
    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reference_builds_a_ref() {
        let tpe = Type::reference("ns", "Forecast");
        match tpe {
            Type::Ref(re) => {
                assert_eq!(re.namespace, "ns");
                assert_eq!(re.name, "Forecast");
            }
            other => panic!("expected Ref, got {other:?}"),
        }
    }

    #[test]
    fn nested_collection_of_map() {
        let tpe = Type::collection(
            CollectionKind::List,
            Type::map(Type::Primitive(Prim::Str), Type::reference("ns", "City")),
        );
        match tpe {
            Type::Collection { kind, member, .. } => {
                assert_eq!(kind, CollectionKind::List);
                assert!(matches!(*member, Type::Map { .. }));
            }
            other => panic!("expected Collection, got {other:?}"),
        }
    }

    #[test]
    fn primitive_predicate() {
        assert!(Type::Primitive(Prim::Int).is_primitive());
        assert!(!Type::reference("ns", "X").is_primitive());
    }
}
