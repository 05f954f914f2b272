//! Hints: metadata attached to declarations, members, and type positions.
//!
//! Hints are open-ended: most variants are opaque annotations that passes
//! carry along unchanged. The three variants that embed a literal tree or a
//! type reference (`Native`, `Constraint`, `Default`) are the ones collision
//! avoidance has to look inside.

use crate::{TypeRef, TypedNode};

/// Kind of error a structure models, for error declarations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    Client,
    Server,
}

/// Metadata attached to a shape, member, or type position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Hint {
    /// A native annotation from the source model, carried as a literal tree.
    Native(TypedNode),

    /// A constraint applied to the annotated position: the constraint
    /// shape's reference plus its literal payload.
    Constraint { target: TypeRef, node: TypedNode },

    /// The default value of a field.
    Default(TypedNode),

    /// Documentation text for the annotated shape.
    Documentation(String),

    /// The annotated shape is deprecated.
    Deprecated {
        message: Option<String>,
        since: Option<String>,
    },

    /// The annotated structure is an error response.
    Error(ErrorKind),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LiteralValue, Prim};

    #[test]
    fn default_hint_wraps_a_literal() {
        let hint = Hint::Default(TypedNode::primitive(Prim::Int, LiteralValue::Int(3)));
        match hint {
            Hint::Default(TypedNode::Primitive { value, .. }) => {
                assert_eq!(value, LiteralValue::Int(3));
            }
            other => panic!("expected Default primitive, got {other:?}"),
        }
    }
}
