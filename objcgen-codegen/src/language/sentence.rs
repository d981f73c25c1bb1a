//! First-sentence detection for documentation briefs.

use unicode_segmentation::UnicodeSegmentation;

/// Finds where the first sentence of a text ends.
pub trait SentenceBoundary {
    /// Byte offset just past the first sentence, including any trailing
    /// whitespace that belongs to it. `None` when the text has no
    /// sentence at all.
    fn first_sentence_end(&self, text: &str) -> Option<usize>;
}

/// Unicode (UAX #29) sentence boundaries.
///
/// A period followed by a lowercase word does not end a sentence, so
/// "e.g. this" stays in one piece. Line breaks count as plain spaces, so
/// wrapped text is not split at the end of a line. Text without terminal
/// punctuation is a single sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentences;

impl SentenceBoundary for UnicodeSentences {
    fn first_sentence_end(&self, text: &str) -> Option<usize> {
        // Same byte length as `text`, so offsets carry over.
        let folded: String = text
            .chars()
            .map(|c| if matches!(c, '\r' | '\n') { ' ' } else { c })
            .collect();
        folded.split_sentence_bounds().next().map(str::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sentence_includes_trailing_space() {
        let text = "Returns the count. Never negative.";
        assert_eq!(UnicodeSentences.first_sentence_end(text), Some(19));
        assert_eq!(&text[..19], "Returns the count. ");
    }

    #[test]
    fn test_unterminated_text_is_one_sentence() {
        let text = "Returns the count";
        assert_eq!(UnicodeSentences.first_sentence_end(text), Some(text.len()));
    }

    #[test]
    fn test_question_mark_ends_sentence() {
        let text = "Is it empty? Yes.";
        assert_eq!(UnicodeSentences.first_sentence_end(text), Some(13));
    }

    #[test]
    fn test_abbreviation_before_lowercase_word() {
        let text = "Use a map, e.g. this one. Or not.";
        assert_eq!(UnicodeSentences.first_sentence_end(text), Some(26));
    }

    #[test]
    fn test_line_break_does_not_end_sentence() {
        let text = "Returns the count\nof items. More.";
        assert_eq!(UnicodeSentences.first_sentence_end(text), Some(28));
        assert_eq!(&text[..28], "Returns the count\nof items. ");

        let text = "Returns the count\r\nof items.";
        assert_eq!(UnicodeSentences.first_sentence_end(text), Some(text.len()));
    }

    #[test]
    fn test_empty_text_has_no_sentence() {
        assert_eq!(UnicodeSentences.first_sentence_end(""), None);
    }
}
