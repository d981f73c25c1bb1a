//! Declaration text synthesis.
//!
//! [`SourceWriter`] carries everything one generation pass needs: the
//! output sink, the options snapshot and the collaborators. The emitters
//! are split by concern:
//!
//! - [`selector`] - method, constructor and function signatures
//! - [`doc_comment`] - documentation comment translation
//! - [`fields`] - instance variables and field setter registration
//! - [`attributes`] - trailing attributes and deprecation pragmas
//! - [`dispatch`] - routing body declarations to strategy hooks

pub mod attributes;
pub mod dispatch;
pub mod doc_comment;
pub mod fields;
pub mod selector;

use objcgen_core::Options;

use crate::{
    builder::{CodeBuilder, Indent},
    language::{NameTable, SentenceBoundary, UnicodeSentences},
};

/// Generation state for one compilation unit.
pub struct SourceWriter<'a> {
    out: CodeBuilder,
    options: Options,
    names: &'a dyn NameTable,
    sentences: &'a dyn SentenceBoundary,
    deprecation_scope_open: bool,
}

impl<'a> SourceWriter<'a> {
    /// Create a writer with Unicode sentence detection.
    pub fn new(options: Options, names: &'a dyn NameTable) -> Self {
        Self {
            out: CodeBuilder::new(Indent::OBJC),
            options,
            names,
            sentences: &UnicodeSentences,
            deprecation_scope_open: false,
        }
    }

    /// Replace the sentence boundary detector used for doc briefs.
    pub fn with_sentence_boundary(mut self, sentences: &'a dyn SentenceBoundary) -> Self {
        self.sentences = sentences;
        self
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn names(&self) -> &'a dyn NameTable {
        self.names
    }

    /// The underlying output sink.
    pub fn out(&mut self) -> &mut CodeBuilder {
        &mut self.out
    }

    pub fn as_str(&self) -> &str {
        self.out.as_str()
    }

    /// Finish the pass and return the generated text.
    pub fn finish(self) -> String {
        assert!(
            !self.deprecation_scope_open,
            "deprecation pragma pushed without a matching pop"
        );
        self.out.build()
    }
}
