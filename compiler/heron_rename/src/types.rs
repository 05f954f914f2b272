//! Type expression rewriting.
//!
//! Structural recursion over [`Type`], one case per variant. Reference
//! names (`Ref`, `Alias`, the display name of `External`) are type-cased
//! and protected; everything structural recurses; fully-qualified host
//! names are never altered.

use heron_ir::{Type, TypeRef};

use crate::hints::{rename_hint, rename_hints};
use crate::reserved::{protect, protect_type, type_case};

/// Rewrite a by-name reference. The namespace is part of the stable shape
/// identity and stays as-is; only the display name is protected.
pub fn rename_type_ref(re: TypeRef) -> TypeRef {
    TypeRef {
        namespace: re.namespace,
        name: protect_type(&re.name),
    }
}

/// Rewrite a type expression tree.
pub fn rename_type(tpe: Type) -> Type {
    match tpe {
        Type::Collection {
            kind,
            member,
            member_hints,
        } => Type::Collection {
            kind,
            member: Box::new(rename_type(*member)),
            member_hints: rename_hints(member_hints),
        },

        Type::Map {
            key,
            key_hints,
            value,
            value_hints,
        } => Type::Map {
            key: Box::new(rename_type(*key)),
            key_hints: rename_hints(key_hints),
            value: Box::new(rename_type(*value)),
            value_hints: rename_hints(value_hints),
        },

        Type::Ref(re) => Type::Ref(rename_type_ref(re)),

        Type::Alias {
            namespace,
            name,
            tpe,
            is_unwrapped,
        } => {
            let cased = type_case(&name);
            let name = protect(&cased);
            // A protected alias name forces the wrapper to stay: eliding it
            // would expose the protected name directly at use sites.
            let is_unwrapped = is_unwrapped || name != cased;
            Type::Alias {
                namespace,
                name,
                tpe: Box::new(rename_type(*tpe)),
                is_unwrapped,
            }
        }

        Type::Primitive(prim) => Type::Primitive(prim),

        Type::External {
            name,
            fully_qualified,
            type_params,
            provider_import,
            underlying,
            refinement,
        } => Type::External {
            name: protect_type(&name),
            // Qualified host-ecosystem names must survive verbatim.
            fully_qualified,
            type_params: type_params.into_iter().map(rename_type).collect(),
            provider_import,
            underlying: Box::new(rename_type(*underlying)),
            refinement: Box::new(rename_hint(*refinement)),
        },

        Type::Nullable(underlying) => Type::Nullable(Box::new(rename_type(*underlying))),
    }
}
