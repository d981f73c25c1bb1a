//! Output sink primitives.
//!
//! - [`CodeBuilder`] - Buffered, indentation-aware text target
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
