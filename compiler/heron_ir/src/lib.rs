//! Heron IR - Codegen Intermediate Representation Types
//!
//! This crate contains the data structures that the Heron code generator
//! works on between model parsing and Scala source emission:
//! - `ShapeId` for stable, namespace-qualified shape identity
//! - Declarations (services, structures, unions, enumerations, type aliases)
//! - Type expressions (`Type`, `TypeRef`)
//! - Members (fields, union alternatives, streaming members)
//! - Hints and literal-value trees (`Hint`, `TypedNode`)
//!
//! # Design Philosophy
//!
//! - **Values, not graphs**: every entity is an immutable tree-shaped value.
//!   Children are owned by parents; cross-declaration references go through
//!   `TypeRef` by name, never through shared pointers.
//! - **Closed sums**: every variant family is a plain `enum` so passes match
//!   exhaustively and the compiler flags any variant they forgot.
//! - **Identity vs. display**: a declaration's `ShapeId` is its permanent
//!   identity and is never rewritten; its display name is what later passes
//!   (notably collision avoidance) are free to change.
//!
//! Every type derives Clone, Eq, `PartialEq`, Hash, Debug so IR values can be
//! compared structurally in tests and memoized by the build driver.

mod decl;
mod hint;
mod member;
mod node;
mod shape_id;
mod tpe;

pub use decl::{
    CompilationUnit, Decl, EnumTag, EnumValue, Enumeration, Operation, Product, Service, TypeAlias,
    Union,
};
pub use hint::{ErrorKind, Hint};
pub use member::{AltKind, Alternative, Field, FieldModifier, StreamingField};
pub use node::{LiteralValue, NodeEntry, NodeField, TypedNode};
pub use shape_id::ShapeId;
pub use tpe::{CollectionKind, Prim, Type, TypeRef};
