use serde::Serialize;

use super::kinds::{Link, Style};

/// A typed run of text within one line.
///
/// Nodes never nest; a line is a flat sequence of them in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineNode {
    /// Text outside every construct, delimiters of unterminated tokens included.
    Text(String),
    /// `^target^`; `label` is the trimmed target, `url` carries a scheme.
    Link { url: String, label: String },
    Bold(String),
    Italic(String),
    Code(String),
}

impl InlineNode {
    pub(crate) fn styled(style: Style, inner: &str) -> Self {
        let inner = inner.to_string();
        match style {
            Style::Bold => InlineNode::Bold(inner),
            Style::Italic => InlineNode::Italic(inner),
            Style::Code => InlineNode::Code(inner),
        }
    }

    /// Text a reader sees, without delimiters.
    pub fn text(&self) -> &str {
        match self {
            InlineNode::Text(t)
            | InlineNode::Bold(t)
            | InlineNode::Italic(t)
            | InlineNode::Code(t) => t,
            InlineNode::Link { label, .. } => label,
        }
    }

    /// Re-emits the node in markup form.
    ///
    /// Links are written with their label, so the original token is only
    /// reproduced when it was already trimmed.
    pub fn to_markup(&self) -> String {
        let wrap = |d: u8, t: &str| {
            let d = d as char;
            format!("{d}{t}{d}")
        };
        match self {
            InlineNode::Text(t) => t.clone(),
            InlineNode::Link { label, .. } => wrap(Link::DELIM, label),
            InlineNode::Bold(t) => wrap(Style::Bold.delimiter(), t),
            InlineNode::Italic(t) => wrap(Style::Italic.delimiter(), t),
            InlineNode::Code(t) => wrap(Style::Code.delimiter(), t),
        }
    }
}
