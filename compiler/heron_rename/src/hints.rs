//! Hint and literal-tree rewriting.
//!
//! `Native` and `Default` hints carry a literal tree; `Constraint`
//! additionally carries the constraint shape's reference. Every other hint
//! variant is opaque metadata and passes through unchanged.
//!
//! The literal transform substitutes the embedded `TypeRef` of the variants
//! that carry one and recurses into child literals. Map, collection, and
//! primitive layers carry no reference of their own: their declared
//! element and value types live on the owning member's `Type` and are
//! rewritten there, not inside the literal.

use heron_ir::{Hint, NodeEntry, NodeField, TypedNode};

use crate::types::rename_type_ref;

/// Rewrite a single hint.
pub fn rename_hint(hint: Hint) -> Hint {
    match hint {
        Hint::Native(node) => Hint::Native(rename_node(node)),

        Hint::Constraint { target, node } => Hint::Constraint {
            target: rename_type_ref(target),
            node: rename_node(node),
        },

        Hint::Default(node) => Hint::Default(rename_node(node)),

        // Opaque metadata: nothing renameable inside.
        other @ (Hint::Documentation(_) | Hint::Deprecated { .. } | Hint::Error(_)) => other,
    }
}

/// Rewrite a hint list in place of its owner.
pub(crate) fn rename_hints(hints: Vec<Hint>) -> Vec<Hint> {
    hints.into_iter().map(rename_hint).collect()
}

/// Rewrite a literal tree.
///
/// Literal payloads (values, case names, wire keys) are reproduced byte for
/// byte; only type references change.
pub fn rename_node(node: TypedNode) -> TypedNode {
    match node {
        TypedNode::Enumeration {
            re,
            value,
            int_value,
            case_name,
        } => TypedNode::Enumeration {
            re: rename_type_ref(re),
            value,
            int_value,
            case_name,
        },

        TypedNode::Structure { re, fields } => TypedNode::Structure {
            re: rename_type_ref(re),
            fields: fields
                .into_iter()
                .map(|field| NodeField {
                    name: field.name,
                    value: rename_node(field.value),
                })
                .collect(),
        },

        TypedNode::NewType { re, member } => TypedNode::NewType {
            re: rename_type_ref(re),
            member: Box::new(rename_node(*member)),
        },

        TypedNode::Alt {
            re,
            case_name,
            member,
        } => TypedNode::Alt {
            re: rename_type_ref(re),
            case_name,
            member: Box::new(rename_node(*member)),
        },

        TypedNode::Map { entries } => TypedNode::Map {
            entries: entries
                .into_iter()
                .map(|entry| NodeEntry {
                    key: rename_node(entry.key),
                    value: rename_node(entry.value),
                })
                .collect(),
        },

        TypedNode::Collection { kind, members } => TypedNode::Collection {
            kind,
            members: members.into_iter().map(rename_node).collect(),
        },

        prim @ TypedNode::Primitive { .. } => prim,
    }
}
