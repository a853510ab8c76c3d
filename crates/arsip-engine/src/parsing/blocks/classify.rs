use super::open::{LineOpen, open_line};

/// Classification of a single line containing only local facts.
///
/// Phase 1 of block parsing: each line is classified on its own, without
/// looking at the lines around it. Whether a nested list item actually
/// attaches is decided later by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// Zero-based line index in the document.
    pub line: usize,
    /// What the line prefix opens.
    pub open: LineOpen,
    /// Line content after trimming and stripping the prefix, trimmed again.
    pub remainder: String,
}

/// Classifies lines of the line-prefix markup.
pub struct LinePrefixClassifier;

impl LinePrefixClassifier {
    /// Classifies line number `line` with raw text `text`.
    ///
    /// The text is trimmed first, so indentation and `\r` never matter.
    pub fn classify(&self, line: usize, text: &str) -> LineClass {
        let trimmed = text.trim();
        let (open, remainder) = open_line(trimmed);

        LineClass {
            line,
            open,
            remainder: remainder.to_string(),
        }
    }
}
