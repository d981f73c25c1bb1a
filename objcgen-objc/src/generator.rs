use objcgen_ast::CompilationUnit;
use objcgen_codegen::{LanguageCodegen, PreviewFile, SourceWriter};
use objcgen_core::{Options, camel_case_package};
use tracing::{debug, warn};

use crate::{HeaderStrategy, ImplementationStrategy, ObjcNameTable};

/// Objective-C generator producing a header and an implementation file
/// per compilation unit.
pub struct Generator<'a> {
    unit: &'a CompilationUnit,
    options: Options,
    names: ObjcNameTable,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "objc"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }
}

impl<'a> Generator<'a> {
    pub fn new(unit: &'a CompilationUnit, options: Options) -> Self {
        Self {
            unit,
            options,
            names: ObjcNameTable,
        }
    }

    /// Output name without extension: the main type's full name.
    ///
    /// `None` for a unit that declares no types.
    pub fn file_name(&self) -> Option<String> {
        let first = self.unit.types.first()?;
        Some(format!(
            "{}{}",
            camel_case_package(first.ty.package()),
            self.unit.main_type_name()
        ))
    }

    /// Render the `.h` file.
    pub fn header(&self) -> String {
        let file_name = self.file_name().unwrap_or_default();
        let mut w = self.writer();
        HeaderStrategy::new().print_file(&mut w, self.unit, &file_name);
        w.finish()
    }

    /// Render the `.m` file.
    pub fn implementation(&self) -> String {
        let file_name = self.file_name().unwrap_or_default();
        let mut w = self.writer();
        ImplementationStrategy::new().print_file(&mut w, self.unit, &file_name);
        w.finish()
    }

    fn writer(&self) -> SourceWriter<'_> {
        SourceWriter::new(self.options, &self.names)
    }

    fn preview_files(&self) -> Vec<PreviewFile> {
        let Some(file_name) = self.file_name() else {
            warn!(source = %self.unit.source_path, "compilation unit declares no types");
            return Vec::new();
        };
        debug!(file = %file_name, types = self.unit.types.len(), "rendering unit");
        vec![
            PreviewFile {
                path: format!("{file_name}.h"),
                content: self.header(),
            },
            PreviewFile {
                path: format!("{file_name}.m"),
                content: self.implementation(),
            },
        ]
    }
}
