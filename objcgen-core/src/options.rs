//! Generation options.
//!
//! One [`Options`] value is captured per compilation unit and passed by
//! value into every generation entry point, so the switches cannot change
//! while a unit is being emitted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Switches that affect declaration output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct Options {
    /// Emit `__attribute__((deprecated))` on deprecated declarations and
    /// bracket them with the deprecation-warning pragma pair.
    pub emit_deprecated_declarations: bool,
    /// Keep private instance variables out of the public header.
    pub hide_private_members: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            emit_deprecated_declarations: true,
            hide_private_members: false,
        }
    }
}

impl Options {
    /// Parse options from TOML source.
    ///
    /// `filename` is only used for diagnostics.
    pub fn from_toml_str(src: &str, filename: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| ConfigError::parse(e, src, filename))
    }

    /// Load options from a TOML file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|e| ConfigError::io(e, path))?;
        Self::from_toml_str(&src, &path.display().to_string())
    }

    /// Load options from `path` if it exists, otherwise return defaults.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn with_deprecated_declarations(mut self, enabled: bool) -> Self {
        self.emit_deprecated_declarations = enabled;
        self
    }

    pub fn with_hidden_private_members(mut self, enabled: bool) -> Self {
        self.hide_private_members = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert!(options.emit_deprecated_declarations);
        assert!(!options.hide_private_members);
    }

    #[test]
    fn test_empty_source_gives_defaults() {
        let options = Options::from_toml_str("", "objcgen.toml").unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_parse_kebab_case_keys() {
        let options = Options::from_toml_str(
            r#"
            emit-deprecated-declarations = false
            hide-private-members = true
            "#,
            "objcgen.toml",
        )
        .unwrap();
        assert!(!options.emit_deprecated_declarations);
        assert!(options.hide_private_members);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Options::from_toml_str("use-arc = true", "objcgen.toml").unwrap_err();
        assert!(matches!(*err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_wrong_type_reports_span() {
        let err = Options::from_toml_str("hide-private-members = \"yes\"", "objcgen.toml")
            .unwrap_err();
        match *err {
            ConfigError::Parse { span, filename, .. } => {
                assert!(span.is_some());
                assert_eq!(filename, "objcgen.toml");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hide-private-members = true").unwrap();
        let options = Options::open(file.path()).unwrap();
        assert!(options.hide_private_members);
        assert!(options.emit_deprecated_declarations);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("objcgen.toml");
        let err = Options::open(&missing).unwrap_err();
        assert!(matches!(*err, ConfigError::Io { .. }));
        assert_eq!(Options::open_or_default(&missing).unwrap(), Options::default());
    }

    #[test]
    fn test_builders() {
        let options = Options::default()
            .with_deprecated_declarations(false)
            .with_hidden_private_members(true);
        assert!(!options.emit_deprecated_declarations);
        assert!(options.hide_private_members);
    }
}
