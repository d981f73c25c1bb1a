//! Documentation comment translation.
//!
//! A structured doc comment becomes a framed block:
//!
//! ```text
//! /**
//!  @brief First sentence.
//!  Rest of the description.
//!  @param key the key to look up
//!  */
//! ```

use objcgen_ast::{DocFragment, Javadoc, TagElement};

use super::SourceWriter;
use crate::language::SentenceBoundary;

/// Tags rendered as `tagName text`.
const PASS_THROUGH_TAGS: &[&str] = &[
    "@author",
    "@exception",
    "@param",
    "@return",
    "@since",
    "@throws",
    "@version",
];

/// Rendered as a compiler attribute instead.
const DEPRECATED_TAG: &str = "@deprecated";

// Cross-references have no rendering yet.
const SEE_TAG: &str = "@see";

const CODE_TAG: &str = "@code";

/// Escape text so it cannot trigger doc-tool directives or end the comment.
pub fn escape_doc_text(text: &str) -> String {
    text.replace('@', "@@")
        .replace("/*", "/\\*")
        .replace("*/", "*\\/")
}

/// Translate a doc comment into its content lines, without framing or
/// indentation.
pub fn doc_comment_lines(javadoc: &Javadoc, sentences: &dyn SentenceBoundary) -> Vec<String> {
    let mut lines = Vec::new();
    for tag in &javadoc.tags {
        if tag.is_description() {
            let description = fragments_text(&tag.fragments);
            match sentences.first_sentence_end(&description) {
                Some(end) => {
                    lines.push(format!("@brief {}", description[..end].trim()));
                    let remainder = description[end..].trim();
                    if !remainder.is_empty() {
                        lines.push(remainder.to_string());
                    }
                }
                None => {
                    let text = description.trim();
                    if !text.is_empty() {
                        lines.push(text.to_string());
                    }
                }
            }
        } else {
            let text = tag_text(tag);
            if !text.is_empty() {
                lines.push(text);
            }
        }
    }
    lines
}

fn tag_text(tag: &TagElement) -> String {
    let Some(name) = tag.name.as_deref() else {
        return fragments_text(&tag.fragments);
    };
    match name {
        _ if PASS_THROUGH_TAGS.contains(&name) => {
            format!("{name} {}", fragments_text(&tag.fragments))
        }
        DEPRECATED_TAG | SEE_TAG => String::new(),
        CODE_TAG => format!("<code>{}</code>", fragments_text(&tag.fragments)),
        // Unknown tag: keep its text, drop the keyword.
        _ => fragments_text(&tag.fragments),
    }
}

fn fragments_text(fragments: &[DocFragment]) -> String {
    let mut text = String::new();
    for fragment in fragments {
        text.push(' ');
        match fragment {
            DocFragment::Text(s) | DocFragment::Reference(s) => {
                text.push_str(&fold_line_breaks(&escape_doc_text(s)));
            }
            DocFragment::Tag(tag) => text.push_str(&tag_text(tag)),
        }
    }
    text.trim().to_string()
}

/// Join wrapped source lines with single spaces, trimming each line.
fn fold_line_breaks(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl SourceWriter<'_> {
    /// Print a framed doc comment at the current indentation. Prints
    /// nothing when there is no comment.
    pub fn print_doc_comment(&mut self, javadoc: Option<&Javadoc>) {
        let Some(javadoc) = javadoc else {
            return;
        };
        let lines = doc_comment_lines(javadoc, self.sentences);
        self.out.print_indent().println("/**");
        for line in &lines {
            self.out.print_indent().print(" ").println(line);
        }
        self.out.print_indent().println(" */");
    }
}

#[cfg(test)]
mod tests {
    use objcgen_ast::{DocFragment, Javadoc, TagElement};
    use objcgen_core::Options;

    use super::*;
    use crate::{language::UnicodeSentences, testing::StubNames};

    fn lines(doc: &Javadoc) -> Vec<String> {
        doc_comment_lines(doc, &UnicodeSentences)
    }

    fn text(s: &str) -> DocFragment {
        DocFragment::text(s)
    }

    #[test]
    fn test_single_sentence_is_brief_only() {
        let doc = Javadoc::description("  Returns the count.  ");
        assert_eq!(lines(&doc), ["@brief Returns the count."]);
    }

    #[test]
    fn test_description_remainder_on_second_line() {
        let doc = Javadoc::description("Returns the count. Never negative, never null.");
        assert_eq!(
            lines(&doc),
            ["@brief Returns the count.", "Never negative, never null."]
        );
    }

    #[test]
    fn test_empty_description_renders_nothing() {
        let doc = Javadoc::description("   ");
        assert!(lines(&doc).is_empty());
    }

    #[test]
    fn test_no_boundary_renders_plain_line() {
        struct NoBoundary;
        impl SentenceBoundary for NoBoundary {
            fn first_sentence_end(&self, _text: &str) -> Option<usize> {
                None
            }
        }
        let doc = Javadoc::description("Returns the count. Never negative.");
        assert_eq!(
            doc_comment_lines(&doc, &NoBoundary),
            ["Returns the count. Never negative."]
        );
    }

    #[test]
    fn test_known_tags_keep_keyword() {
        let doc = Javadoc::default()
            .tag(TagElement::new("@param", [text("key"), text(" the key ")]))
            .tag(TagElement::new("@since", [text("1.2")]))
            .tag(TagElement::new("@throws", [DocFragment::reference("IOException"), text("on failure")]))
            .tag(TagElement::new("@exception", [DocFragment::reference("IllegalStateException")]))
            .tag(TagElement::new("@author", [text("Jane Doe")]))
            .tag(TagElement::new("@version", [text("2.0")]));
        assert_eq!(
            lines(&doc),
            [
                "@param key the key",
                "@since 1.2",
                "@throws IOException on failure",
                "@exception IllegalStateException",
                "@author Jane Doe",
                "@version 2.0",
            ]
        );
    }

    #[test]
    fn test_deprecated_and_see_are_suppressed() {
        let doc = Javadoc::default()
            .tag(TagElement::new("@deprecated", [text("use bar")]))
            .tag(TagElement::new("@see", [DocFragment::reference("Foo#bar")]));
        assert!(lines(&doc).is_empty());
    }

    #[test]
    fn test_inline_code_and_unknown_tag() {
        let doc = Javadoc::default()
            .tag(TagElement::new(
                "@return",
                [
                    TagElement::new("@code", [text("null")]).into(),
                    text(" if missing"),
                ],
            ))
            .tag(TagElement::new("@hide", [text("internal only")]));
        assert_eq!(
            lines(&doc),
            ["@return <code>null</code> if missing", "internal only"]
        );
    }

    #[test]
    fn test_nested_tag_in_description() {
        let doc = Javadoc::new([TagElement::description([
            text("Wraps a"),
            TagElement::new("@link", [DocFragment::reference("List")]).into(),
            text("instance."),
        ])]);
        assert_eq!(lines(&doc), ["@brief Wraps a List instance."]);
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_doc_text("user@host"), "user@@host");
        assert_eq!(escape_doc_text("a /* b"), "a /\\* b");
        assert_eq!(escape_doc_text("a */ b"), "a *\\/ b");
        let doc = Javadoc::description("Matches a*/b and @ signs.");
        assert_eq!(lines(&doc), ["@brief Matches a*\\/b and @@ signs."]);
    }

    #[test]
    fn test_print_framed_and_indented() {
        let names = StubNames;
        let mut writer = SourceWriter::new(Options::default(), &names);
        writer.out().indent();
        writer.print_doc_comment(Some(&Javadoc::description("Runs it. Twice.")));
        assert_eq!(
            writer.finish(),
            "  /**\n   @brief Runs it.\n   Twice.\n   */\n"
        );
    }

    #[test]
    fn test_wrapped_description() {
        let doc = Javadoc::description("Returns the number of\n   stored items.\nNever negative.");
        assert_eq!(
            lines(&doc),
            ["@brief Returns the number of stored items.", "Never negative."]
        );

        let names = StubNames;
        let mut writer = SourceWriter::new(Options::default(), &names);
        writer.out().indent();
        writer.print_doc_comment(Some(&Javadoc::description(
            "Returns the number of\nstored items. Never\nnegative.",
        )));
        assert_eq!(
            writer.finish(),
            "  /**\n   @brief Returns the number of stored items.\n   Never negative.\n   */\n"
        );
    }

    #[test]
    fn test_print_absent_comment() {
        let names = StubNames;
        let mut writer = SourceWriter::new(Options::default(), &names);
        writer.print_doc_comment(None);
        assert_eq!(writer.finish(), "");
    }
}
