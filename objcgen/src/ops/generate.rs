//! Generate operation - header and implementation output for a unit.

use std::{fs, path::Path};

use eyre::{Context, Result};
use objcgen_ast::CompilationUnit;
use objcgen_core::Options;
use objcgen_objc::{Generator, LanguageCodegen};
use tracing::{debug, info, warn};

use crate::reports::{GenerateReport, GenerationResult, WrittenFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(
    unit: &CompilationUnit,
    options: Options,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let generator = Generator::new(unit, options);
    debug!(language = generator.language(), source = %unit.source_path, "generating");
    let files = generator.preview();
    if files.is_empty() {
        warn!(source = %unit.source_path, "nothing to generate");
    }

    let result = if opts.dry_run {
        GenerationResult::Preview(files)
    } else {
        let mut written = Vec::with_capacity(files.len());
        for file in files {
            let path = opts.output_dir.join(&file.path);
            let changed = write_if_changed(&path, &file.content)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), changed, "wrote file");
            written.push(WrittenFile {
                path: file.path,
                changed,
            });
        }
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: written,
        })
    };

    Ok(GenerateReport {
        source_path: unit.source_path.clone(),
        type_names: unit.types.iter().map(|t| t.ty.name.clone()).collect(),
        result,
    })
}

/// Write `content` unless the file already holds it. Returns whether the
/// file changed.
fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use objcgen_ast::TypeDeclaration;

    use super::*;

    fn unit() -> CompilationUnit {
        CompilationUnit::new("com/foo/Bar.java").with_type(TypeDeclaration::class("com.foo.Bar"))
    }

    #[test]
    fn test_generate_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("out");
        let opts = GenerateOptions {
            output_dir: &output_dir,
            dry_run: false,
        };

        let report = generate(&unit(), Options::default(), opts).unwrap();
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        let paths: Vec<&str> = written.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["ComFooBar.h", "ComFooBar.m"]);
        assert!(written.files.iter().all(|f| f.changed));

        let header = fs::read_to_string(output_dir.join("ComFooBar.h")).unwrap();
        assert!(header.contains("@interface ComFooBar : NSObject"));
    }

    #[test]
    fn test_generate_skips_unchanged_files() {
        let dir = tempfile::tempdir().unwrap();
        let run = || {
            generate(
                &unit(),
                Options::default(),
                GenerateOptions {
                    output_dir: dir.path(),
                    dry_run: false,
                },
            )
            .unwrap()
        };
        run();
        let GenerationResult::Written(written) = run().result else {
            panic!("expected written result");
        };
        assert!(written.files.iter().all(|f| !f.changed));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let opts = GenerateOptions {
            output_dir: dir.path(),
            dry_run: true,
        };

        let report = generate(&unit(), Options::default(), opts).unwrap();
        let GenerationResult::Preview(files) = report.result else {
            panic!("expected preview result");
        };
        assert_eq!(files.len(), 2);
        assert!(!dir.path().join("ComFooBar.h").exists());
    }
}
