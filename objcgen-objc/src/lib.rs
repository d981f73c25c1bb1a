//! Objective-C header and implementation generation for objcgen.
//!
//! [`Generator`] drives two [`DeclarationStrategy`] implementations over a
//! compilation unit: [`HeaderStrategy`] for the public `.h` file and
//! [`ImplementationStrategy`] for the `.m` file. Names, types and
//! selectors come from [`ObjcNameTable`].

mod generator;
mod header;
mod implementation;
mod naming;
mod support;

pub use generator::Generator;
pub use header::HeaderStrategy;
pub use implementation::ImplementationStrategy;
pub use naming::ObjcNameTable;
pub use objcgen_codegen::{DeclarationStrategy, LanguageCodegen, PreviewFile};
