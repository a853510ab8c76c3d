use crate::parsing::{
    blocks::{BlockKind, BlockNode, kinds::MAX_LEVEL},
    inline::InlineNode,
};

/// Panics if `blocks` break a structural invariant of the block parser.
pub fn check(blocks: &[BlockNode]) {
    for (pos, b) in blocks.iter().enumerate() {
        if pos > 0 {
            assert!(
                blocks[pos - 1].line < b.line,
                "blocks out of line order at {pos}: {} then {}",
                blocks[pos - 1].line,
                b.line
            );
        }

        match (b.list_level(), b.parent) {
            (Some(1), None) | (None, None) => {}
            (Some(level), Some(parent)) => {
                assert!(
                    (2..=MAX_LEVEL).contains(&level),
                    "list level out of range at {pos}: {level}"
                );
                assert!(parent < pos, "parent {parent} not before child {pos}");
                assert_eq!(
                    blocks[parent].list_level(),
                    Some(level - 1),
                    "parent {parent} of level {level} item {pos} has wrong level"
                );
            }
            (level, parent) => {
                panic!("block {pos}: list level {level:?} with parent {parent:?}")
            }
        }

        if let BlockKind::Heading { level, .. } = b.kind {
            assert!(
                (1..=MAX_LEVEL).contains(&level),
                "heading level out of range at {pos}: {level}"
            );
        }

        check_spans(pos, b.spans());
    }
}

fn check_spans(pos: usize, spans: &[InlineNode]) {
    for (i, span) in spans.iter().enumerate() {
        if let InlineNode::Text(t) = span {
            assert!(!t.is_empty(), "block {pos}: empty text span at {i}");
            if let Some(InlineNode::Text(_)) = spans.get(i + 1) {
                panic!("block {pos}: adjacent text spans at {i}");
            }
        } else if !matches!(span, InlineNode::Link { .. }) {
            assert!(!span.text().is_empty(), "block {pos}: empty styled span at {i}");
        }
    }
}
