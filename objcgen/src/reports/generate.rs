//! Generate command report data structures.

use std::path::PathBuf;

use objcgen_objc::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Source path recorded in the unit.
    pub source_path: String,

    /// Qualified names of the generated types.
    pub type_names: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    pub files: Vec<WrittenFile>,
}

#[derive(Debug)]
pub struct WrittenFile {
    /// Path relative to the output directory.
    pub path: String,
    /// False when the file already had the generated content.
    pub changed: bool,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Source", &self.source_path);
        out.section(&format!("Types ({})", self.type_names.len()));
        for name in &self.type_names {
            out.list_item(name);
        }
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        for file in &written.files {
            if file.changed {
                out.added_item(&file.path);
            } else {
                out.unchanged_item(&file.path);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
