//! Member rewriting: fields, union alternatives, streaming members.
//!
//! Member names follow member casing before the reserved check; the wire
//! name (`real_name`) is preserved verbatim so serialization is unaffected
//! by renaming. Streaming member names are fixed by the streaming wire
//! convention and are not cased or protected at all.

use heron_ir::{AltKind, Alternative, Field, StreamingField};

use crate::decls::rename_product;
use crate::hints::rename_hints;
use crate::reserved::protect_member;
use crate::types::rename_type;

/// Rewrite a structure field or operation parameter.
pub fn rename_field(field: Field) -> Field {
    Field {
        name: protect_member(&field.name),
        real_name: field.real_name,
        tpe: rename_type(field.tpe),
        modifier: field.modifier,
        hints: rename_hints(field.hints),
    }
}

/// Rewrite a union alternative. The payload dispatches on its kind: plain
/// types go through the type rewriter, inline products through the
/// product rewriter.
pub fn rename_alternative(alt: Alternative) -> Alternative {
    Alternative {
        name: protect_member(&alt.name),
        real_name: alt.real_name,
        member: match alt.member {
            AltKind::Type(tpe) => AltKind::Type(rename_type(tpe)),
            AltKind::Product(product) => AltKind::Product(rename_product(product)),
        },
        hints: rename_hints(alt.hints),
    }
}

/// Rewrite a streaming member. Its type and hints are processed like any
/// other member's; the name stays verbatim.
pub fn rename_streaming_field(field: StreamingField) -> StreamingField {
    StreamingField {
        name: field.name,
        tpe: rename_type(field.tpe),
        hints: rename_hints(field.hints),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heron_ir::{FieldModifier, Prim, Product, ShapeId, Type};

    #[test]
    fn field_member_name_is_protected_wire_name_kept() {
        let field = rename_field(Field::required("type", Type::Primitive(Prim::Str)));
        assert_eq!(field.name, "_type");
        assert_eq!(field.real_name, "type");
        assert_eq!(field.modifier, FieldModifier::Required);
    }

    #[test]
    fn field_name_is_member_cased_first() {
        // `Type` member-cases to `type`, which is reserved.
        let field = rename_field(Field::required("Type", Type::Primitive(Prim::Str)));
        assert_eq!(field.name, "_type");
        assert_eq!(field.real_name, "Type");
    }

    #[test]
    fn field_colliding_with_object_method_is_protected() {
        let field = rename_field(Field::required("toString", Type::Primitive(Prim::Str)));
        assert_eq!(field.name, "_toString");
    }

    #[test]
    fn field_type_is_rewritten() {
        let field = rename_field(Field::required("target", Type::reference("ns", "class")));
        match field.tpe {
            Type::Ref(re) => assert_eq!(re.name, "_Class"),
            other => panic!("expected Ref, got {other:?}"),
        }
    }

    #[test]
    fn alternative_with_type_payload() {
        let alt = rename_alternative(Alternative {
            name: "New".to_owned(),
            real_name: "New".to_owned(),
            member: AltKind::Type(Type::reference("ns", "val")),
            hints: Vec::new(),
        });
        assert_eq!(alt.name, "_new");
        assert_eq!(alt.real_name, "New");
        match alt.member {
            AltKind::Type(Type::Ref(re)) => assert_eq!(re.name, "_Val"),
            other => panic!("expected Type payload, got {other:?}"),
        }
    }

    #[test]
    fn alternative_with_inline_product_payload() {
        let alt = rename_alternative(Alternative {
            name: "point".to_owned(),
            real_name: "point".to_owned(),
            member: AltKind::Product(Product {
                shape_id: ShapeId::new("ns", "case"),
                name: "case".to_owned(),
                fields: vec![Field::required("def", Type::Primitive(Prim::Int))],
                mixins: Vec::new(),
                recursive: false,
                hints: Vec::new(),
                is_mixin: false,
            }),
            hints: Vec::new(),
        });
        match alt.member {
            AltKind::Product(product) => {
                assert_eq!(product.name, "_Case");
                assert_eq!(product.fields[0].name, "_def");
                // Shape identity never changes.
                assert_eq!(product.shape_id, ShapeId::new("ns", "case"));
            }
            other => panic!("expected Product payload, got {other:?}"),
        }
    }

    #[test]
    fn streaming_member_name_is_left_verbatim() {
        let field = rename_streaming_field(StreamingField {
            name: "match".to_owned(),
            tpe: Type::reference("ns", "trait"),
            hints: Vec::new(),
        });
        assert_eq!(field.name, "match");
        match field.tpe {
            Type::Ref(re) => assert_eq!(re.name, "_Trait"),
            other => panic!("expected Ref, got {other:?}"),
        }
    }
}
