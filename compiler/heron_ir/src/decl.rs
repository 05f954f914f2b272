//! Declarations: the top-level shapes of a compilation unit.
//!
//! Each declaration carries a `ShapeId` (its permanent identity in the
//! source model) and a display `name` (what the emitter prints). Passes that
//! rewrite display names leave the `ShapeId` untouched.

use crate::{Alternative, Field, Hint, ShapeId, StreamingField, Type};

/// The root of the codegen IR: one source namespace's declarations, in
/// model order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct CompilationUnit {
    pub namespace: String,
    pub declarations: Vec<Decl>,
}

/// A top-level declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Decl {
    Service(Service),
    Product(Product),
    Union(Union),
    TypeAlias(TypeAlias),
    Enumeration(Enumeration),
}

impl Decl {
    /// The declaration's display name.
    pub fn name(&self) -> &str {
        match self {
            Decl::Service(s) => &s.name,
            Decl::Product(p) => &p.name,
            Decl::Union(u) => &u.name,
            Decl::TypeAlias(a) => &a.name,
            Decl::Enumeration(e) => &e.name,
        }
    }

    /// The declaration's stable identity.
    pub fn shape_id(&self) -> &ShapeId {
        match self {
            Decl::Service(s) => &s.shape_id,
            Decl::Product(p) => &p.shape_id,
            Decl::Union(u) => &u.shape_id,
            Decl::TypeAlias(a) => &a.shape_id,
            Decl::Enumeration(e) => &e.shape_id,
        }
    }
}

/// A service: a named group of operations.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Service {
    pub shape_id: ShapeId,
    pub name: String,
    pub ops: Vec<Operation>,
    pub hints: Vec<Hint>,
    /// Service version string from the model, passed through verbatim.
    pub version: String,
}

/// One operation of a service.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Operation {
    pub shape_id: ShapeId,
    /// Display name of the generated operation type (type-cased).
    pub name: String,
    /// Name of the generated interface method (member-cased, rewritten
    /// independently of `name`).
    pub method_name: String,
    pub params: Vec<Field>,
    pub input: Type,
    pub errors: Vec<Type>,
    pub output: Type,
    pub streamed_input: Option<StreamingField>,
    pub streamed_output: Option<StreamingField>,
    pub hints: Vec<Hint>,
}

/// A structure (product type).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub shape_id: ShapeId,
    pub name: String,
    pub fields: Vec<Field>,
    /// Mixin shapes this structure flattens members from.
    pub mixins: Vec<Type>,
    pub recursive: bool,
    pub hints: Vec<Hint>,
    pub is_mixin: bool,
}

/// A tagged union.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Union {
    pub shape_id: ShapeId,
    pub name: String,
    pub alts: Vec<Alternative>,
    pub mixins: Vec<Type>,
    pub recursive: bool,
    pub hints: Vec<Hint>,
}

/// A type alias (newtype over its target).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeAlias {
    pub shape_id: ShapeId,
    pub name: String,
    pub tpe: Type,
    /// Whether the emitter may elide the wrapper and use `tpe` directly.
    pub is_unwrapped: bool,
    pub recursive: bool,
    pub hints: Vec<Hint>,
}

/// Runtime representation of an enumeration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum EnumTag {
    /// Cases are identified by their string value.
    Str,
    /// Cases are identified by their integer value.
    Int,
    /// String-valued, but unknown values are preserved instead of rejected.
    OpenStr,
    /// Integer-valued, open.
    OpenInt,
}

/// One case of an enumeration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumValue {
    /// The case's string value as it appears on the wire. Never rewritten.
    pub value: String,
    /// The case's integer value, for int-tagged enumerations.
    pub int_value: Option<i32>,
    /// Display name of the generated case object.
    pub name: String,
    pub hints: Vec<Hint>,
}

/// An enumeration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Enumeration {
    pub shape_id: ShapeId,
    pub name: String,
    pub tag: EnumTag,
    pub values: Vec<EnumValue>,
    pub hints: Vec<Hint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Prim;
    use pretty_assertions::assert_eq;

    fn sample_alias() -> TypeAlias {
        TypeAlias {
            shape_id: ShapeId::new("ns", "Meters"),
            name: "Meters".to_owned(),
            tpe: Type::Primitive(Prim::Double),
            is_unwrapped: false,
            recursive: false,
            hints: Vec::new(),
        }
    }

    #[test]
    fn decl_name_dispatches_per_variant() {
        let decl = Decl::TypeAlias(sample_alias());
        assert_eq!(decl.name(), "Meters");
        assert_eq!(decl.shape_id().to_string(), "ns#Meters");
    }

    #[test]
    fn unit_preserves_declaration_order() {
        let unit = CompilationUnit {
            namespace: "ns".to_owned(),
            declarations: vec![
                Decl::TypeAlias(sample_alias()),
                Decl::Enumeration(Enumeration {
                    shape_id: ShapeId::new("ns", "Unit"),
                    name: "Unit".to_owned(),
                    tag: EnumTag::Str,
                    values: Vec::new(),
                    hints: Vec::new(),
                }),
            ],
        };
        let names: Vec<&str> = unit.declarations.iter().map(Decl::name).collect();
        assert_eq!(names, vec!["Meters", "Unit"]);
    }
}
