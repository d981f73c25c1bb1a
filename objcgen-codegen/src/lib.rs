//! Declaration text synthesis for the objcgen Objective-C generator.
//!
//! Given a resolved type, this crate renders method and constructor
//! signatures, instance variable blocks, field setter registrations,
//! compiler attributes and translated doc comments. Whole-file layout is
//! left to the header and implementation strategies built on top of it.
//!
//! # Module Organization
//!
//! - [`builder`] - Output sink (CodeBuilder, Indent)
//! - [`language`] - Collaborators (NameTable, SentenceBoundary, LanguageCodegen)
//! - [`declaration`] - The emitters and the strategy dispatcher
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod declaration;
pub mod language;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, Indent};
pub use declaration::{
    SourceWriter,
    dispatch::{DeclarationStrategy, generate, print_declarations, print_functions, print_method},
    fields::FieldVisibility,
};
pub use language::{LanguageCodegen, NameTable, PreviewFile, SentenceBoundary, UnicodeSentences};
