//! Resolved syntax tree types for the objcgen declaration generator.
//!
//! These types are produced by an upstream parse/resolve stage and are
//! consumed read-only by the generator. Every type is already resolved:
//! the generator never infers anything from them.
//!
//! # Architecture
//!
//! ```text
//! source → parse/resolve (upstream) → objcgen-ast (resolved unit) → codegen
//! ```
//!
//! The types are:
//! - Immutable once built (builders consume `self`)
//! - Serializable, so a resolved unit can be handed over as JSON
//! - Self-contained (no dependencies beyond serde)

mod decl;
mod javadoc;
mod types;
mod unit;

pub use decl::{
    AnnotationMember, BodyDeclaration, FieldDeclaration, FunctionDeclaration, MethodDeclaration,
    NativeDeclaration, Parameter, VariableBinding, VariableFragment,
};
pub use javadoc::{DocFragment, Javadoc, TagElement};
pub use types::{Annotation, Modifier, Modifiers, TypeRef, TypeRefKind};
pub use unit::{CompilationUnit, TypeDeclaration, TypeKind};
