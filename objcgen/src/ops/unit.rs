//! Loading resolved compilation units.

use std::{fs, path::Path};

use eyre::{Context, Result};
use objcgen_ast::CompilationUnit;
use tracing::debug;

/// Read a compilation unit from a JSON file.
pub fn load_unit(path: &Path) -> Result<CompilationUnit> {
    let src = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let unit: CompilationUnit = serde_json::from_str(&src)
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;
    debug!(path = %path.display(), types = unit.types.len(), "loaded unit");
    Ok(unit)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_unit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"source_path": "com/foo/Bar.java", "types": [{{"kind": "class", "ty": {{"name": "com.foo.Bar", "kind": "class"}}}}]}}"#
        )
        .unwrap();

        let unit = load_unit(file.path()).unwrap();
        assert_eq!(unit.main_type_name(), "Bar");
        assert_eq!(unit.types.len(), 1);
    }

    #[test]
    fn test_load_unit_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_unit(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
