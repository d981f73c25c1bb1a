//! Trailing compiler attributes and deprecation pragmas.

use objcgen_ast::{Annotation, MethodDeclaration};
use objcgen_core::Options;

use super::{SourceWriter, selector::selector_segments};

/// Opts a method out of name-based ownership inference.
pub const METHOD_FAMILY_NONE: &str = "OBJC_METHOD_FAMILY_NONE";

pub const DEPRECATED_ATTRIBUTE: &str = "__attribute__((deprecated))";

/// Selector prefixes that make the target compiler infer a method family.
pub const METHOD_FAMILY_PREFIXES: &[&str] = &["new", "copy", "alloc", "init", "mutableCopy"];

const DEPRECATED_SIMPLE_NAME: &str = "Deprecated";
const DEPRECATED_QUALIFIED_NAME: &str = "java.lang.Deprecated";

const PRAGMA_PUSH: &str = "#pragma clang diagnostic push";
const PRAGMA_IGNORE_DEPRECATED: &str =
    "#pragma GCC diagnostic ignored \"-Wdeprecated-declarations\"";
const PRAGMA_POP: &str = "#pragma clang diagnostic pop";

/// Whether the selector's first segment starts with a method-family prefix.
///
/// The compiler would otherwise assume such methods return an owned
/// instance of the receiver's class, which translated code rarely does.
pub fn needs_method_family_none(selector: &str) -> bool {
    let first = selector_segments(selector).into_iter().next().unwrap_or("");
    METHOD_FAMILY_PREFIXES
        .iter()
        .any(|prefix| first.starts_with(prefix))
}

/// Whether any annotation is the `Deprecated` marker, bare or qualified.
pub fn has_deprecated(annotations: &[Annotation]) -> bool {
    annotations.iter().any(|annotation| {
        let expected = if annotation.is_qualified() {
            DEPRECATED_QUALIFIED_NAME
        } else {
            DEPRECATED_SIMPLE_NAME
        };
        annotation.type_name == expected
    })
}

pub fn needs_deprecated_attribute(options: Options, annotations: &[Annotation]) -> bool {
    options.emit_deprecated_declarations && has_deprecated(annotations)
}

impl SourceWriter<'_> {
    /// Open a region where deprecation warnings are ignored.
    ///
    /// Translated code may call deprecated API legitimately; the warnings
    /// are only useful for hand-written code. Prints nothing unless
    /// deprecated declarations are emitted.
    ///
    /// # Panics
    ///
    /// When a region is already open.
    pub fn push_ignore_deprecated_declarations_pragma(&mut self) {
        if !self.options.emit_deprecated_declarations {
            return;
        }
        assert!(
            !self.deprecation_scope_open,
            "deprecation pragma pushed twice without a pop"
        );
        self.deprecation_scope_open = true;
        self.out.println(PRAGMA_PUSH).println(PRAGMA_IGNORE_DEPRECATED);
    }

    /// Close the region opened by
    /// [`push_ignore_deprecated_declarations_pragma`](Self::push_ignore_deprecated_declarations_pragma).
    ///
    /// # Panics
    ///
    /// When no region is open.
    pub fn pop_ignore_deprecated_declarations_pragma(&mut self) {
        if !self.options.emit_deprecated_declarations {
            return;
        }
        assert!(
            self.deprecation_scope_open,
            "deprecation pragma popped without a push"
        );
        self.deprecation_scope_open = false;
        self.out.println(PRAGMA_POP);
    }

    /// Run `f` inside a deprecation-ignoring region.
    pub fn ignoring_deprecations(&mut self, f: impl FnOnce(&mut Self)) {
        self.push_ignore_deprecated_declarations_pragma();
        f(self);
        self.pop_ignore_deprecated_declarations_pragma();
    }

    /// The attribute suffix for a declaration with `annotations`, with a
    /// leading space, or empty.
    pub fn deprecated_attribute(&self, annotations: &[Annotation]) -> &'static str {
        if needs_deprecated_attribute(self.options, annotations) {
            " __attribute__((deprecated))"
        } else {
            ""
        }
    }

    /// Print a normal method declaration with its doc comment and
    /// attributes, preceded by a blank line.
    pub fn print_normal_method_declaration(&mut self, method: &MethodDeclaration) {
        self.out.newline();
        self.print_doc_comment(method.javadoc.as_ref());
        let decl = self.method_declaration(method);
        self.out.print(&decl);
        let selector = self.names.method_selector(method);
        if !method.modifiers.is_synthetic() && needs_method_family_none(&selector) {
            self.out.print(" ").print(METHOD_FAMILY_NONE);
        }
        let deprecated = self.deprecated_attribute(&method.annotations);
        self.out.print(deprecated).println(";");
    }

    /// Print a constructor declaration with its doc comment and deprecated
    /// attribute, preceded by a blank line.
    pub fn print_constructor_declaration(&mut self, method: &MethodDeclaration, is_inner: bool) {
        self.out.newline();
        self.print_doc_comment(method.javadoc.as_ref());
        let decl = self.constructor_declaration(method, is_inner);
        let deprecated = self.deprecated_attribute(&method.annotations);
        self.out.print(&decl).print(deprecated).println(";");
    }
}
