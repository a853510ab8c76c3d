use crate::parsing::inline::parse_inline;

use super::{
    classify::LineClass,
    open::LineOpen,
    open_lists::{Attach, OpenLists},
    types::{BlockKind, BlockNode},
};

/// Phase 2 of block parsing: turns classified lines into block nodes while
/// tracking which list items are open for nesting.
pub struct BlockBuilder {
    lists: OpenLists,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            lists: OpenLists::default(),
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        match c.open {
            LineOpen::Heading { level } => {
                self.lists.close_all();
                let spans = parse_inline(&c.remainder);
                self.emit(c.line, BlockKind::Heading { level, spans }, None);
            }
            LineOpen::ListItem { level } => self.push_list_item(c, level),
            LineOpen::Image => {
                self.lists.close_all();
                let src = c.remainder.clone();
                self.emit(c.line, BlockKind::Image { src }, None);
            }
            LineOpen::Paragraph => {
                self.lists.close_all();
                let spans = parse_inline(&c.remainder);
                self.emit(c.line, BlockKind::Paragraph { spans }, None);
            }
        }
    }

    pub fn finish(self) -> Vec<BlockNode> {
        self.out
    }

    fn push_list_item(&mut self, c: &LineClass, level: u8) {
        let parent = match self.lists.attach(level) {
            Attach::Root => None,
            Attach::Under(pos) => Some(pos),
            Attach::Orphan => {
                log::debug!(
                    "line {}: level {level} list item has no open parent, dropped",
                    c.line + 1
                );
                return;
            }
        };

        let spans = parse_inline(&c.remainder);
        let pos = self.emit(c.line, BlockKind::ListItem { level, spans }, parent);
        self.lists.opened(level, pos);
    }

    /// Appends a node and returns its position in the sequence.
    fn emit(&mut self, line: usize, kind: BlockKind, parent: Option<usize>) -> usize {
        self.out.push(BlockNode { line, kind, parent });
        self.out.len() - 1
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
