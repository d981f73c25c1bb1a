//! Language-level code generation traits.

/// Trait for generators that turn one compilation unit into target files.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "objc")
    fn language(&self) -> &'static str;

    /// Render every output file for the unit without touching the disk.
    fn preview(&self) -> Vec<PreviewFile>;
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
