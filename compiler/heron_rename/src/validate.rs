//! Debug-mode validation of rename-pass output.
//!
//! Walks the renamed unit and asserts that the pass's post-conditions hold:
//! - No display name anywhere in the tree is still a reserved word
//!   (declarations, members, alternatives, enum cases, references,
//!   operation and method names).
//! - No two declarations ended up with the same display name.
//!
//! These checks run only in debug builds (`debug_assert!`). They catch
//! gaps in the reserved-word table or in the traversal early, before the
//! emitter produces uncompilable output.

use heron_ir::{
    AltKind, Alternative, CompilationUnit, Decl, Field, Hint, Operation, Product, StreamingField,
    Type, TypedNode,
};
use rustc_hash::FxHashMap;

use crate::reserved::is_reserved;

/// Validate that a renamed `CompilationUnit` satisfies the pass invariants.
///
/// Called after renaming in debug builds. Panics with a descriptive message
/// if any invariant is violated.
pub fn validate(unit: &CompilationUnit) {
    let mut seen: FxHashMap<&str, String> = FxHashMap::default();
    for decl in &unit.declarations {
        let name = decl.name();
        debug_assert!(
            !is_reserved(name),
            "declaration {} kept reserved display name `{name}`",
            decl.shape_id(),
        );
        let previous = seen.insert(name, decl.shape_id().to_string());
        debug_assert!(
            previous.is_none(),
            "declarations {previous:?} and {} both renamed to `{name}`",
            decl.shape_id(),
        );
        validate_decl(decl);
    }
}

fn validate_decl(decl: &Decl) {
    match decl {
        Decl::Service(service) => {
            for op in &service.ops {
                validate_operation(op);
            }
            validate_hints(&service.hints);
        }
        Decl::Product(product) => validate_product(product),
        Decl::Union(union) => {
            for alt in &union.alts {
                validate_alternative(alt);
            }
            for mixin in &union.mixins {
                validate_type(mixin);
            }
            validate_hints(&union.hints);
        }
        Decl::TypeAlias(alias) => {
            validate_type(&alias.tpe);
            validate_hints(&alias.hints);
        }
        Decl::Enumeration(enumeration) => {
            for value in &enumeration.values {
                debug_assert!(
                    !is_reserved(&value.name),
                    "enum case `{}` of {} kept a reserved name",
                    value.name,
                    enumeration.shape_id,
                );
                validate_hints(&value.hints);
            }
            validate_hints(&enumeration.hints);
        }
    }
}

fn validate_operation(op: &Operation) {
    debug_assert!(
        !is_reserved(&op.name),
        "operation {} kept reserved display name `{}`",
        op.shape_id,
        op.name,
    );
    debug_assert!(
        !is_reserved(&op.method_name),
        "operation {} kept reserved method name `{}`",
        op.shape_id,
        op.method_name,
    );
    for param in &op.params {
        validate_field(param);
    }
    validate_type(&op.input);
    validate_type(&op.output);
    for error in &op.errors {
        validate_type(error);
    }
    if let Some(streamed) = &op.streamed_input {
        validate_streaming(streamed);
    }
    if let Some(streamed) = &op.streamed_output {
        validate_streaming(streamed);
    }
    validate_hints(&op.hints);
}

fn validate_product(product: &Product) {
    for field in &product.fields {
        validate_field(field);
    }
    for mixin in &product.mixins {
        validate_type(mixin);
    }
    validate_hints(&product.hints);
}

fn validate_field(field: &Field) {
    debug_assert!(
        !is_reserved(&field.name),
        "field `{}` (wire name `{}`) kept a reserved member name",
        field.name,
        field.real_name,
    );
    validate_type(&field.tpe);
    validate_hints(&field.hints);
}

fn validate_alternative(alt: &Alternative) {
    debug_assert!(
        !is_reserved(&alt.name),
        "alternative `{}` (wire name `{}`) kept a reserved member name",
        alt.name,
        alt.real_name,
    );
    match &alt.member {
        AltKind::Type(tpe) => validate_type(tpe),
        AltKind::Product(product) => validate_product(product),
    }
    validate_hints(&alt.hints);
}

// Streaming member names are exempt from protection; only their type and
// hints are subject to the invariants.
fn validate_streaming(field: &StreamingField) {
    validate_type(&field.tpe);
    validate_hints(&field.hints);
}

fn validate_type(tpe: &Type) {
    match tpe {
        Type::Collection {
            member,
            member_hints,
            ..
        } => {
            validate_type(member);
            validate_hints(member_hints);
        }
        Type::Map {
            key,
            key_hints,
            value,
            value_hints,
        } => {
            validate_type(key);
            validate_hints(key_hints);
            validate_type(value);
            validate_hints(value_hints);
        }
        Type::Ref(re) => {
            debug_assert!(
                !is_reserved(&re.name),
                "reference to {}#{} kept a reserved name",
                re.namespace,
                re.name,
            );
        }
        Type::Alias { name, tpe, .. } => {
            debug_assert!(!is_reserved(name), "alias `{name}` kept a reserved name");
            validate_type(tpe);
        }
        Type::Primitive(_) => {}
        Type::External {
            name,
            type_params,
            underlying,
            refinement,
            ..
        } => {
            debug_assert!(
                !is_reserved(name),
                "external type `{name}` kept a reserved display name",
            );
            for param in type_params {
                validate_type(param);
            }
            validate_type(underlying);
            validate_hint(refinement);
        }
        Type::Nullable(underlying) => validate_type(underlying),
    }
}

fn validate_hints(hints: &[Hint]) {
    for hint in hints {
        validate_hint(hint);
    }
}

fn validate_hint(hint: &Hint) {
    match hint {
        Hint::Native(node) | Hint::Default(node) => validate_node(node),
        Hint::Constraint { target, node } => {
            debug_assert!(
                !is_reserved(&target.name),
                "constraint target {}#{} kept a reserved name",
                target.namespace,
                target.name,
            );
            validate_node(node);
        }
        Hint::Documentation(_) | Hint::Deprecated { .. } | Hint::Error(_) => {}
    }
}

fn validate_node(node: &TypedNode) {
    match node {
        TypedNode::Enumeration { re, .. } => {
            debug_assert!(
                !is_reserved(&re.name),
                "literal reference to {}#{} kept a reserved name",
                re.namespace,
                re.name,
            );
        }
        TypedNode::Structure { re, fields } => {
            debug_assert!(
                !is_reserved(&re.name),
                "literal reference to {}#{} kept a reserved name",
                re.namespace,
                re.name,
            );
            for field in fields {
                validate_node(&field.value);
            }
        }
        TypedNode::NewType { re, member } | TypedNode::Alt { re, member, .. } => {
            debug_assert!(
                !is_reserved(&re.name),
                "literal reference to {}#{} kept a reserved name",
                re.namespace,
                re.name,
            );
            validate_node(member);
        }
        TypedNode::Map { entries } => {
            for entry in entries {
                validate_node(&entry.key);
                validate_node(&entry.value);
            }
        }
        TypedNode::Collection { members, .. } => {
            for member in members {
                validate_node(member);
            }
        }
        TypedNode::Primitive { .. } => {}
    }
}
