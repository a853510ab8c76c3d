use serde::Serialize;

use crate::parsing::inline::InlineNode;

/// The kind of a block and its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    /// `#`..`###` heading, level 1 to 3.
    Heading { level: u8, spans: Vec<InlineNode> },
    /// `-`..`---` list item, level 1 to 3.
    ListItem { level: u8, spans: Vec<InlineNode> },
    /// `@@` image line.
    Image { src: String },
    /// Any other line. Blank lines give a paragraph without spans.
    Paragraph { spans: Vec<InlineNode> },
}

/// A parsed block in document order.
///
/// Documents are flat sequences; list nesting is expressed through
/// `parent` rather than child vectors, so nodes never point back at
/// each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    /// Zero-based index of the source line this block came from.
    pub line: usize,
    pub kind: BlockKind,
    /// Position in the block sequence of the list item this one is nested
    /// under. Only level 2 and 3 list items have a parent.
    pub parent: Option<usize>,
}

impl BlockNode {
    /// Inline spans of the block; images have none.
    pub fn spans(&self) -> &[InlineNode] {
        match &self.kind {
            BlockKind::Heading { spans, .. }
            | BlockKind::ListItem { spans, .. }
            | BlockKind::Paragraph { spans } => spans,
            BlockKind::Image { .. } => &[],
        }
    }

    /// List nesting level, or `None` for anything that is not a list item.
    pub fn list_level(&self) -> Option<u8> {
        match self.kind {
            BlockKind::ListItem { level, .. } => Some(level),
            _ => None,
        }
    }
}
