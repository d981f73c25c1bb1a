//! Collaborator abstractions.
//!
//! - [`NameTable`] - Target names, types and selectors
//! - [`SentenceBoundary`] - First-sentence detection for doc briefs
//! - [`LanguageCodegen`] - Whole-unit generators
//! - [`PreviewFile`] - Generated file preview

mod naming;
mod sentence;
mod traits;

pub use naming::NameTable;
pub use sentence::{SentenceBoundary, UnicodeSentences};
pub use traits::{LanguageCodegen, PreviewFile};
