//! Line-oriented output sink for generated source text.

use super::Indent;

/// Buffered text target with an indentation level.
///
/// Raw output (`print`, `println`, `newline`) never writes indentation;
/// `print_indent` and `line` do. This split lets callers start a line at
/// the current indentation and then assemble it piecewise.
///
/// # Example
///
/// ```
/// use objcgen_codegen::builder::CodeBuilder;
///
/// let mut out = CodeBuilder::default();
/// out.line("@interface Foo {").indent();
/// out.print_indent();
/// out.print("int ").println("count_;");
/// out.unindent().line("}");
///
/// assert_eq!(out.build(), "@interface Foo {\n  int count_;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Append raw text.
    pub fn print(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Append raw text followed by a newline.
    pub fn println(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Append a bare newline.
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Write the current indentation and nothing else.
    pub fn print_indent(&mut self) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self
    }

    /// Write an indented, newline-terminated line.
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.print_indent().println(s)
    }

    /// Increase indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn unindent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Get the current indentation level.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }
}
