//! Declaration rewriting and the pass entry point.
//!
//! [`rename_unit`] maps over the declaration list in order, producing an
//! equivalent unit with every display name processed. Declarations are
//! independent of each other (reference resolution is by name, not shared
//! identity), so the traversal is a plain ordered map.

use heron_ir::{
    CompilationUnit, Decl, EnumValue, Enumeration, Operation, Product, Service, TypeAlias, Union,
};

use crate::hints::rename_hints;
use crate::members::{rename_alternative, rename_field, rename_streaming_field};
use crate::reserved::{protect, protect_member, protect_type, type_case};
use crate::types::rename_type;

/// Rename every colliding display name in a compilation unit.
///
/// This is the main entry point for collision avoidance. The result has the
/// same shape and ordering as the input; only display names (and the alias
/// unwrapped flags they force) differ.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(namespace = %unit.namespace, decls = unit.declarations.len())
)]
pub fn rename_unit(unit: CompilationUnit) -> CompilationUnit {
    let unit = CompilationUnit {
        namespace: unit.namespace,
        declarations: unit.declarations.into_iter().map(rename_decl).collect(),
    };

    #[cfg(debug_assertions)]
    crate::validate(&unit);

    unit
}

/// Rewrite a single declaration.
pub fn rename_decl(decl: Decl) -> Decl {
    match decl {
        Decl::Service(service) => Decl::Service(rename_service(service)),
        Decl::Product(product) => Decl::Product(rename_product(product)),
        Decl::Union(union) => Decl::Union(rename_union(union)),
        Decl::TypeAlias(alias) => Decl::TypeAlias(rename_type_alias(alias)),
        Decl::Enumeration(enumeration) => Decl::Enumeration(rename_enumeration(enumeration)),
    }
}

fn rename_service(service: Service) -> Service {
    Service {
        shape_id: service.shape_id,
        name: protect_type(&service.name),
        ops: service.ops.into_iter().map(rename_operation).collect(),
        hints: rename_hints(service.hints),
        version: service.version,
    }
}

fn rename_operation(op: Operation) -> Operation {
    Operation {
        shape_id: op.shape_id,
        name: protect_type(&op.name),
        // The interface method follows member casing, independently of the
        // operation type's display name.
        method_name: protect_member(&op.method_name),
        params: op.params.into_iter().map(rename_field).collect(),
        input: rename_type(op.input),
        errors: op.errors.into_iter().map(rename_type).collect(),
        output: rename_type(op.output),
        streamed_input: op.streamed_input.map(rename_streaming_field),
        streamed_output: op.streamed_output.map(rename_streaming_field),
        hints: rename_hints(op.hints),
    }
}

pub(crate) fn rename_product(product: Product) -> Product {
    Product {
        shape_id: product.shape_id,
        name: protect_type(&product.name),
        fields: product.fields.into_iter().map(rename_field).collect(),
        mixins: product.mixins.into_iter().map(rename_type).collect(),
        recursive: product.recursive,
        hints: rename_hints(product.hints),
        is_mixin: product.is_mixin,
    }
}

fn rename_union(union: Union) -> Union {
    Union {
        shape_id: union.shape_id,
        name: protect_type(&union.name),
        alts: union.alts.into_iter().map(rename_alternative).collect(),
        mixins: union.mixins.into_iter().map(rename_type).collect(),
        recursive: union.recursive,
        hints: rename_hints(union.hints),
    }
}

fn rename_enumeration(enumeration: Enumeration) -> Enumeration {
    Enumeration {
        shape_id: enumeration.shape_id,
        name: protect_type(&enumeration.name),
        tag: enumeration.tag,
        values: enumeration
            .values
            .into_iter()
            .map(rename_enum_value)
            .collect(),
        hints: rename_hints(enumeration.hints),
    }
}

fn rename_enum_value(value: EnumValue) -> EnumValue {
    EnumValue {
        // Wire values stay byte for byte.
        value: value.value,
        int_value: value.int_value,
        // Case names already follow the model's own capitalization
        // convention, so they are protected verbatim, without casing.
        name: protect(&value.name),
        hints: rename_hints(value.hints),
    }
}

fn rename_type_alias(alias: TypeAlias) -> TypeAlias {
    let cased = type_case(&alias.name);
    let name = protect(&cased);
    // A protected alias name forces the wrapper to stay present; the flag
    // never reverts once set, and a renamed *target* alone does not set it.
    let is_unwrapped = alias.is_unwrapped || name != cased;
    TypeAlias {
        shape_id: alias.shape_id,
        name,
        tpe: rename_type(alias.tpe),
        is_unwrapped,
        recursive: alias.recursive,
        hints: rename_hints(alias.hints),
    }
}
