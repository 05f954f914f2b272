//! Literal value trees.
//!
//! A `TypedNode` is the typed literal tree embedded in hints: default
//! values, constraint payloads, and native-hint arguments. The variants that
//! describe a value of a *declared* shape carry a `TypeRef` back to that
//! shape, which is why literal trees participate in collision avoidance:
//! those references must follow the declaration when it is renamed.
//!
//! Literal payloads themselves (strings, numbers, case names, wire keys) are
//! data, not identifiers, and are reproduced byte for byte by every pass.

use crate::{CollectionKind, Prim, TypeRef};

/// The raw payload of a primitive literal.
///
/// Fractional numbers keep their lexical source form so the emitter can
/// reproduce them exactly and the IR stays `Eq + Hash`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum LiteralValue {
    Null,
    Bool(bool),
    Int(i64),
    Decimal(String),
    Str(String),
    Blob(Vec<u8>),
}

/// A named field inside a structure literal. The name is the wire key.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeField {
    pub name: String,
    pub value: TypedNode,
}

/// One key/value pair inside a map literal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeEntry {
    pub key: TypedNode,
    pub value: TypedNode,
}

/// A typed literal tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypedNode {
    /// A value of an enumeration: the case's string value, optional integer
    /// value, and case name.
    Enumeration {
        re: TypeRef,
        value: String,
        int_value: Option<i32>,
        case_name: String,
    },

    /// A value of a structure, one literal per populated field.
    Structure { re: TypeRef, fields: Vec<NodeField> },

    /// A value of a newtype (unwrapped alias), wrapping one literal.
    NewType { re: TypeRef, member: Box<TypedNode> },

    /// A value of a union: the selected case and its payload.
    Alt {
        re: TypeRef,
        case_name: String,
        member: Box<TypedNode>,
    },

    /// A map literal. Carries no type reference of its own; the declared
    /// key/value types live on the owning member's `Type`.
    Map { entries: Vec<NodeEntry> },

    /// A collection literal. Like `Map`, carries no type reference.
    Collection {
        kind: CollectionKind,
        members: Vec<TypedNode>,
    },

    /// A primitive literal.
    Primitive { kind: Prim, value: LiteralValue },
}

impl TypedNode {
    /// Create a primitive literal.
    #[inline]
    pub fn primitive(kind: Prim, value: LiteralValue) -> Self {
        TypedNode::Primitive { kind, value }
    }

    /// Create a string literal.
    #[inline]
    pub fn string(value: impl Into<String>) -> Self {
        TypedNode::Primitive {
            kind: Prim::Str,
            value: LiteralValue::Str(value.into()),
        }
    }
}
