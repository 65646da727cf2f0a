//! Paragraph splitting for answer text.
//!
//! Answers are authored as plain text with blank lines between paragraphs.
//! The iterator borrows the answer and yields trimmed slices, so rendering a
//! question twice only means calling `split_on_blank_lines` again (or cloning
//! the iterator).

use std::iter::FusedIterator;

/// Lazy iterator over the paragraphs of a text.
#[derive(Clone, Debug)]
pub struct Paragraphs<'a> {
    rest: &'a str,
}

/// Split `text` on blank (whitespace-only) lines.
///
/// Runs of blank lines count as one separator, each paragraph is trimmed, and
/// empty paragraphs are skipped. Single newlines stay inside a paragraph.
pub fn split_on_blank_lines(text: &str) -> Paragraphs<'_> {
    Paragraphs { rest: text }
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while !self.rest.is_empty() {
            let mut end = self.rest.len();
            let mut next_start = self.rest.len();
            let mut offset = 0;
            for line in self.rest.split_inclusive('\n') {
                let line_end = offset + line.len();
                if line.trim().is_empty() {
                    end = offset;
                    next_start = line_end;
                    break;
                }
                offset = line_end;
            }

            let paragraph = self.rest[..end].trim();
            self.rest = &self.rest[next_start..];
            if !paragraph.is_empty() {
                return Some(paragraph);
            }
        }
        None
    }
}

impl FusedIterator for Paragraphs<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<&str> {
        split_on_blank_lines(text).collect()
    }

    #[test]
    fn splits_on_blank_lines_only() {
        let text = "First line\nstill first.\n\nSecond paragraph.";
        assert_eq!(
            collect(text),
            vec!["First line\nstill first.", "Second paragraph."]
        );
    }

    #[test]
    fn collapses_repeated_and_whitespace_only_separators() {
        let text = "\n\n  One.  \n \t \n\n\nTwo.\n   \n";
        assert_eq!(collect(text), vec!["One.", "Two."]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let text = "One.\r\n\r\nTwo.";
        assert_eq!(collect(text), vec!["One.", "Two."]);
    }

    #[test]
    fn empty_and_blank_text_yield_nothing() {
        assert!(collect("").is_empty());
        assert!(collect(" \n\n\t").is_empty());
    }

    #[test]
    fn iterator_is_restartable_by_clone() {
        let paragraphs = split_on_blank_lines("A.\n\nB.");
        let first: Vec<&str> = paragraphs.clone().collect();
        let second: Vec<&str> = paragraphs.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
