//! Collision avoidance for the Heron compiler.
//!
//! This crate rewrites every user-supplied display name in a
//! [`heron_ir::CompilationUnit`] that would collide with a reserved word of
//! the Scala target, or with a method every JVM value inherits from
//! `java.lang.Object` / `scala.Any`, and propagates the consequences of
//! those renames through the whole tree, embedded literal trees included.
//!
//! # Pipeline Position
//!
//! ```text
//! Model → Parse → **Rename** → Emit (Scala)
//! ```
//!
//! # What Happens During Renaming
//!
//! 1. **Declarations** (`decls`): service, structure, union, enumeration,
//!    and alias names are type-cased then protected; enum case names are
//!    protected verbatim; alias unwrapped flags are re-derived.
//! 2. **Members** (`members`): field and alternative names are member-cased
//!    then protected; wire names are preserved untouched.
//! 3. **Type expressions** (`types`): every `Ref`/`Alias` use site is
//!    rewritten in lockstep with its declaration, so no reference dangles.
//! 4. **Hints and literals** (`hints`): literal trees in default values,
//!    constraints, and native hints have their embedded type references
//!    substituted recursively.
//!
//! The pass is a pure function from one `CompilationUnit` value to another:
//! no mutation, no I/O, no failure path. Shape identities (`ShapeId`) are
//! never altered, only display names.

mod decls;
mod hints;
mod members;
pub mod reserved;
mod types;
mod validate;

pub use decls::{rename_decl, rename_unit};
pub use hints::{rename_hint, rename_node};
pub use members::{rename_alternative, rename_field, rename_streaming_field};
pub use types::{rename_type, rename_type_ref};
pub use validate::validate;
