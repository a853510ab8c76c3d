use super::{
    cursor::Cursor,
    kinds::{Link, Style},
    types::InlineNode,
};

/// Parses one line of inline content into a sequence of [`InlineNode`]s.
///
/// # Two passes
/// 1. `^...^` links are found first. Their content is never styled.
/// 2. Every text run outside a link is scanned for `*bold*`, `~italic~`
///    and `` `code` ``.
///
/// Both passes are single left-to-right scans. Tokens do not nest or
/// overlap, and an unterminated or empty token stays literal text.
///
/// # Returns
/// Nodes covering the entire input in source order. Text between
/// constructs is emitted as `InlineNode::Text`; empty input gives no nodes.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let start = cur.pos();
        if let Some(content) = try_parse_delimited(&mut cur, Link::DELIM) {
            parse_styles(cur.slice(text_start, start), &mut out);
            let (url, label) = Link::resolve(content);
            out.push(InlineNode::Link { url, label });
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    parse_styles(cur.slice(text_start, s.len()), &mut out);
    out
}

/// Second pass over a text run that contains no links.
fn parse_styles(s: &str, out: &mut Vec<InlineNode>) {
    let mut cur = Cursor::new(s);
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, text: &str) {
        if !text.is_empty() {
            out.push(InlineNode::Text(text.to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        let styled = cur.peek().and_then(Style::from_delimiter).and_then(|style| {
            try_parse_delimited(&mut cur, style.delimiter()).map(|content| (style, content))
        });

        if let Some((style, content)) = styled {
            flush_text(out, cur.slice(text_start, start));
            out.push(InlineNode::styled(style, content));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(out, cur.slice(text_start, s.len()));
}

/// Attempts to parse `delim content delim` at the current position, where
/// content is at least one byte and does not contain `delim`.
///
/// On success the cursor sits after the closing delimiter and the content is
/// returned. On failure the cursor position is restored.
fn try_parse_delimited<'a>(cur: &mut Cursor<'a>, delim: u8) -> Option<&'a str> {
    if cur.peek() != Some(delim) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // opening delimiter
    let inner_start = cur.pos();

    if !cur.bump_until(delim) || cur.pos() == inner_start {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump(); // closing delimiter

    Some(cur.slice(inner_start, inner_end))
}
