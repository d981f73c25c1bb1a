//! Shared utility functions for code generation.

/// Uppercase the first character of a string (e.g., "name" -> "Name").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a dotted package name to a type-name prefix
/// (e.g., "com.google.common" -> "ComGoogleCommon").
pub fn camel_case_package(package: &str) -> String {
    package.split('.').map(capitalize).collect()
}

/// A run of `n` spaces.
pub fn pad(n: usize) -> String {
    " ".repeat(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("name"), "Name");
        assert_eq!(capitalize("Name"), "Name");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize("hElLo"), "HElLo");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_camel_case_package() {
        assert_eq!(camel_case_package("com.google.common"), "ComGoogleCommon");
        assert_eq!(camel_case_package("java.lang"), "JavaLang");
        assert_eq!(camel_case_package("foo"), "Foo");
        assert_eq!(camel_case_package(""), "");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad(0), "");
        assert_eq!(pad(3), "   ");
    }
}
