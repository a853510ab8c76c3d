use serde::Serialize;

use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    inline::InlineNode,
};

/// One line per block: `<line> <kind>[ <parent] <span>...`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct Snap(pub Vec<String>);

pub fn normalize(blocks: &[BlockNode]) -> Snap {
    Snap(blocks.iter().map(block_line).collect())
}

fn block_line(b: &BlockNode) -> String {
    let kind = match &b.kind {
        BlockKind::Heading { level, .. } => format!("h{level}"),
        BlockKind::ListItem { level, .. } => format!("li{level}"),
        BlockKind::Image { src } => format!("img[{src}]"),
        BlockKind::Paragraph { .. } => "p".to_string(),
    };

    let mut out = format!("{} {kind}", b.line);
    if let Some(parent) = b.parent {
        out.push_str(&format!(" <{parent}"));
    }
    for span in b.spans() {
        out.push(' ');
        out.push_str(&span_token(span));
    }
    out
}

fn span_token(n: &InlineNode) -> String {
    match n {
        InlineNode::Text(t) => format!("text[{t}]"),
        InlineNode::Link { url, label } => format!("link[{label} -> {url}]"),
        InlineNode::Bold(t) => format!("bold[{t}]"),
        InlineNode::Italic(t) => format!("italic[{t}]"),
        InlineNode::Code(t) => format!("code[{t}]"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_list_shows_parent() {
        let doc = parse_document("- a\n-- b *c*");
        assert_eq!(
            normalize(&doc.blocks).0,
            vec!["0 li1 text[a]", "1 li2 <0 text[b ] bold[c]"]
        );
    }

    #[test]
    fn image_and_link() {
        let doc = parse_document("@@ pic.png\n^x.org^");
        assert_eq!(
            normalize(&doc.blocks).0,
            vec!["0 img[pic.png]", "1 p link[x.org -> https://x.org]"]
        );
    }
}
