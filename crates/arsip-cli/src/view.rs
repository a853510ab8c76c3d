use arsip_engine::parsing::{
    Article,
    blocks::{BlockKind, BlockNode},
    inline::InlineNode,
    paired::PairedNode,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn heading_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn code_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn link_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED)
}

/// Terminal lines for a parsed article.
pub fn article_lines(article: &Article) -> Vec<Line<'static>> {
    match article {
        Article::LinePrefix(doc) => doc.blocks.iter().map(block_line).collect(),
        Article::Paired(doc) => {
            let mut lines = vec![Line::from(Span::styled(doc.title.clone(), heading_style()))];
            lines.push(Line::default());
            lines.extend(paired_lines(&doc.nodes));
            lines
        }
    }
}

fn block_line(block: &BlockNode) -> Line<'static> {
    match &block.kind {
        BlockKind::Heading { level, spans } => {
            let mut out = vec![Span::styled(
                format!("{} ", "#".repeat(*level as usize)),
                heading_style(),
            )];
            out.extend(inline_spans(spans, heading_style()));
            Line::from(out)
        }
        BlockKind::ListItem { level, spans } => {
            let indent = "  ".repeat(usize::from(*level).saturating_sub(1));
            let mut out = vec![Span::raw(format!("{indent}• "))];
            out.extend(inline_spans(spans, Style::default()));
            Line::from(out)
        }
        BlockKind::Image { src } => Line::from(Span::styled(
            format!("[image: {src}]"),
            Style::default().add_modifier(Modifier::DIM),
        )),
        BlockKind::Paragraph { spans } => Line::from(inline_spans(spans, Style::default())),
    }
}

fn inline_spans(spans: &[InlineNode], base: Style) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|node| match node {
            InlineNode::Text(t) => Span::styled(t.clone(), base),
            InlineNode::Link { label, .. } => Span::styled(label.clone(), base.patch(link_style())),
            InlineNode::Bold(t) => Span::styled(t.clone(), base.add_modifier(Modifier::BOLD)),
            InlineNode::Italic(t) => Span::styled(t.clone(), base.add_modifier(Modifier::ITALIC)),
            InlineNode::Code(t) => Span::styled(t.clone(), base.patch(code_style())),
        })
        .collect()
}

/// Paired bodies are a node stream; lines are cut at line breaks and
/// around code blocks.
fn paired_lines(nodes: &[PairedNode]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current = Vec::new();

    for node in nodes {
        match node {
            PairedNode::LineBreak => lines.push(Line::from(std::mem::take(&mut current))),
            PairedNode::CodeBlock(code) => {
                if !current.is_empty() {
                    lines.push(Line::from(std::mem::take(&mut current)));
                }
                lines.extend(
                    code.lines()
                        .map(|l| Line::from(Span::styled(l.to_string(), code_style()))),
                );
            }
            other => paired_spans(other, Style::default(), &mut current),
        }
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

fn paired_spans(node: &PairedNode, base: Style, out: &mut Vec<Span<'static>>) {
    match node {
        PairedNode::Text(t) => out.push(Span::styled(t.clone(), base)),
        PairedNode::LineBreak => out.push(Span::raw(" ")),
        PairedNode::CodeBlock(t) | PairedNode::Code(t) => {
            out.push(Span::styled(t.clone(), base.patch(code_style())))
        }
        PairedNode::Heading { children, .. } => {
            for child in children {
                paired_spans(child, base.patch(heading_style()), out);
            }
        }
        PairedNode::ListItem { level, children } => {
            let indent = "  ".repeat(usize::from(*level).saturating_sub(1));
            out.push(Span::raw(format!("{indent}• ")));
            for child in children {
                paired_spans(child, base, out);
            }
        }
        PairedNode::Bold(t) => out.push(Span::styled(t.clone(), base.add_modifier(Modifier::BOLD))),
        PairedNode::Italic(t) => {
            out.push(Span::styled(t.clone(), base.add_modifier(Modifier::ITALIC)))
        }
        PairedNode::Image { src } => out.push(Span::styled(
            format!("[image: {src}]"),
            base.add_modifier(Modifier::DIM),
        )),
        PairedNode::Link { label, .. } => {
            out.push(Span::styled(label.clone(), base.patch(link_style())))
        }
    }
}
