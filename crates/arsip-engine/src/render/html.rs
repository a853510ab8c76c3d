use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::parsing::{
    Article,
    blocks::{BlockKind, BlockNode},
    inline::InlineNode,
    paired::{PairedDoc, PairedNode},
};

/// Seconds of animation delay added per source line.
pub const DELAY_STEP_SECS: f64 = 0.1;

/// `alt` text of line-prefix images.
pub const IMAGE_ALT: &str = "image";

/// Link schemes rendered as plain text instead of an anchor.
const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "data:", "vbscript:"];

pub fn render_article(article: &Article) -> String {
    match article {
        Article::LinePrefix(doc) => render_blocks(&doc.blocks),
        Article::Paired(doc) => render_paired(doc),
    }
}

/// Renders line-prefix blocks, one element per line.
///
/// Runs of top-level list items share one `<ul>`; nested items are
/// rendered inside their parent's `<li>`.
pub fn render_blocks(blocks: &[BlockNode]) -> String {
    let children = child_index(blocks);
    let mut out = String::new();
    let mut list_open = false;

    for (pos, b) in blocks.iter().enumerate().filter(|(_, b)| b.parent.is_none()) {
        let is_item = matches!(b.kind, BlockKind::ListItem { .. });
        if is_item != list_open {
            out.push_str(if is_item { "<ul>\n" } else { "</ul>\n" });
            list_open = is_item;
        }
        render_block(blocks, &children, pos, &mut out);
    }
    if list_open {
        out.push_str("</ul>\n");
    }
    out
}

/// Positions of the nested items of every block.
fn child_index(blocks: &[BlockNode]) -> Vec<Vec<usize>> {
    let mut children = vec![Vec::new(); blocks.len()];
    for (pos, b) in blocks.iter().enumerate() {
        if let Some(parent) = b.parent.filter(|p| *p < blocks.len()) {
            children[parent].push(pos);
        }
    }
    children
}

fn render_block(blocks: &[BlockNode], children: &[Vec<usize>], pos: usize, out: &mut String) {
    let b = &blocks[pos];
    let delay = delay(b.line);

    match &b.kind {
        BlockKind::Heading { level, spans } => {
            out.push_str(&format!(
                "<h{level} class=\"fade-in heading-{level}\" style=\"animation-delay: {delay}\">{}</h{level}>\n",
                render_spans(spans)
            ));
        }
        BlockKind::Paragraph { spans } => {
            out.push_str(&format!(
                "<p class=\"fade-in paragraph-1\" style=\"animation-delay: {delay}\">{}</p>\n",
                render_spans(spans)
            ));
        }
        BlockKind::Image { src } => {
            out.push_str(&format!(
                "<img class=\"fade-in image-1\" style=\"animation-delay: {delay}\" src=\"{}\" alt=\"{IMAGE_ALT}\">\n",
                attr(src)
            ));
        }
        BlockKind::ListItem { level, spans } => {
            out.push_str(&format!(
                "<li class=\"fade-in list-{level}\" style=\"animation-delay: {delay}\">{}",
                render_spans(spans)
            ));
            if !children[pos].is_empty() {
                out.push_str("\n<ul>\n");
                for &child in &children[pos] {
                    render_block(blocks, children, child, out);
                }
                out.push_str("</ul>\n");
            }
            out.push_str("</li>\n");
        }
    }
}

fn delay(line: usize) -> String {
    format!("{:.1}s", line as f64 * DELAY_STEP_SECS)
}

fn render_spans(spans: &[InlineNode]) -> String {
    spans.iter().map(render_span).collect()
}

fn render_span(span: &InlineNode) -> String {
    match span {
        InlineNode::Text(t) => text(t).into_owned(),
        InlineNode::Link { url, label } => anchor(url, label, Some("link-1")),
        InlineNode::Bold(t) => format!("<strong>{}</strong>", text(t)),
        InlineNode::Italic(t) => format!("<em>{}</em>", text(t)),
        InlineNode::Code(t) => format!("<code>{}</code>", text(t)),
    }
}

fn anchor(url: &str, label: &str, class: Option<&str>) -> String {
    let lower = url.trim_start().to_ascii_lowercase();
    if UNSAFE_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        log::debug!("refusing to link unsafe url {url:?}");
        return text(label).into_owned();
    }

    let class = class.map(|c| format!(" class=\"{c}\"")).unwrap_or_default();
    format!(
        "<a{class} href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        attr(url),
        text(label)
    )
}

/// Renders a paired-dialect article: the title heading, then the body.
pub fn render_paired(doc: &PairedDoc) -> String {
    format!(
        "<h1 class=\"view-title\">{}</h1>\n<div class=\"content\">{}</div>\n",
        text(&doc.title),
        render_paired_nodes(&doc.nodes)
    )
}

fn render_paired_nodes(nodes: &[PairedNode]) -> String {
    nodes.iter().map(render_paired_node).collect()
}

fn render_paired_node(node: &PairedNode) -> String {
    match node {
        PairedNode::Text(t) => text(t).into_owned(),
        PairedNode::LineBreak => "<br>\n".to_string(),
        PairedNode::CodeBlock(code) => format!("<pre><code>{}</code></pre>", text(code)),
        PairedNode::Heading { level, children } => {
            format!("<h{level}>{}</h{level}>", render_paired_nodes(children))
        }
        PairedNode::ListItem { level, children } => {
            format!(
                "<ul class=\"list-{level}\"><li>{}</li></ul>",
                render_paired_nodes(children)
            )
        }
        PairedNode::Code(t) => format!("<code>{}</code>", text(t)),
        PairedNode::Bold(t) => format!("<strong>{}</strong>", text(t)),
        PairedNode::Italic(t) => format!("<em>{}</em>", text(t)),
        PairedNode::Image { src } => format!("<img src=\"{}\" alt=\"\">", attr(src)),
        PairedNode::Link { label, url } => anchor(url, label, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{paired::parse_paired, parse_document};
    use pretty_assertions::assert_eq;

    fn render(text: &str) -> String {
        render_blocks(&parse_document(text).blocks)
    }

    #[test]
    fn heading_and_paragraph() {
        assert_eq!(
            render("# Hi\nplain *b*"),
            "<h1 class=\"fade-in heading-1\" style=\"animation-delay: 0.0s\">Hi</h1>\n\
             <p class=\"fade-in paragraph-1\" style=\"animation-delay: 0.1s\">plain <strong>b</strong></p>\n"
        );
    }

    #[test]
    fn delay_is_rounded_to_tenths() {
        assert_eq!(delay(3), "0.3s");
        assert_eq!(delay(12), "1.2s");
    }

    #[test]
    fn nested_list_renders_inside_parent() {
        assert_eq!(
            render("- a\n-- b\n- c"),
            "<ul>\n\
             <li class=\"fade-in list-1\" style=\"animation-delay: 0.0s\">a\n\
             <ul>\n\
             <li class=\"fade-in list-2\" style=\"animation-delay: 0.1s\">b</li>\n\
             </ul>\n\
             </li>\n\
             <li class=\"fade-in list-1\" style=\"animation-delay: 0.2s\">c</li>\n\
             </ul>\n"
        );
    }

    #[test]
    fn list_closes_before_paragraph() {
        let html = render("- a\ntext\n- b");
        assert_eq!(html.matches("<ul>").count(), 2);
        assert_eq!(html.matches("</ul>").count(), 2);
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        assert_eq!(
            render("@@ a\".png\n<b>&"),
            "<img class=\"fade-in image-1\" style=\"animation-delay: 0.0s\" src=\"a&quot;.png\" alt=\"image\">\n\
             <p class=\"fade-in paragraph-1\" style=\"animation-delay: 0.1s\">&lt;b&gt;&amp;</p>\n"
        );
    }

    #[test]
    fn links_open_in_new_tab() {
        assert_eq!(
            render_span(&InlineNode::Link {
                url: "https://x.org/?a=1&b=2".into(),
                label: "x".into(),
            }),
            "<a class=\"link-1\" href=\"https://x.org/?a=1&amp;b=2\" target=\"_blank\" rel=\"noopener noreferrer\">x</a>"
        );
    }

    #[test]
    fn script_urls_are_not_linked() {
        assert_eq!(
            render_span(&InlineNode::Link {
                url: "JavaScript:alert(1)".into(),
                label: "click".into(),
            }),
            "click"
        );
    }

    #[test]
    fn paired_article() {
        let doc = parse_paired("#Judul#\n*a* <x>\n$p.png$");
        assert_eq!(
            render_paired(&doc),
            "<h1 class=\"view-title\">Judul</h1>\n\
             <div class=\"content\"><strong>a</strong> &lt;x&gt;<br>\n<img src=\"p.png\" alt=\"\"></div>\n"
        );
    }

    #[test]
    fn paired_list_and_code_block() {
        let doc = parse_paired("#T#\n--x--```<a>```");
        assert_eq!(
            render_paired_nodes(&doc.nodes),
            "<ul class=\"list-2\"><li>x</li></ul><pre><code>&lt;a&gt;</code></pre>"
        );
    }
}
