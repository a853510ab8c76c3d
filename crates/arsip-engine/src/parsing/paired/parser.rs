use std::sync::OnceLock;

use regex::Regex;

use super::kinds::{Fence, Pair, PairedLink};
use super::types::{PairedDoc, PairedNode};
use crate::parsing::inline::cursor::Cursor;

/// Title used when the first line has no `#...#` pair.
pub const DEFAULT_TITLE: &str = "Untitled";

static TITLE_RE: OnceLock<Regex> = OnceLock::new();

/// Where a run of nodes sits; headings and list items only admit the
/// inline pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Body,
    Inline,
}

/// Parses a paired-delimiter article: title from the first line, body from
/// the rest. A trailing newline is kept as a final line break.
pub fn parse_paired(text: &str) -> PairedDoc {
    let mut lines = text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));
    let title = lines.next().map_or_else(|| DEFAULT_TITLE.to_string(), extract_title);
    let body = lines.collect::<Vec<_>>().join("\n");

    PairedDoc {
        title,
        nodes: parse_nodes(&body, Scope::Body),
    }
}

/// Takes the first `#...#` pair on `line` as the title, trimmed. A pair
/// holding only spaces gives an empty title.
pub fn extract_title(line: &str) -> String {
    let re = TITLE_RE.get_or_init(|| Regex::new(r"#(.+?)#").expect("Invalid title regex"));
    re.captures(line)
        .and_then(|c| c.get(1))
        .map_or(DEFAULT_TITLE, |m| m.as_str().trim())
        .to_string()
}

fn parse_nodes(s: &str, scope: Scope) -> Vec<PairedNode> {
    let mut cur = Cursor::new(s);
    let mut out = Vec::new();
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        if let Some(node) = try_construct(&mut cur, scope) {
            push_text(&mut out, &s[text_start..start]);
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    push_text(&mut out, &s[text_start..]);
    out
}

fn push_text(out: &mut Vec<PairedNode>, text: &str) {
    if !text.is_empty() {
        out.push(PairedNode::Text(text.to_string()));
    }
}

fn try_construct(cur: &mut Cursor<'_>, scope: Scope) -> Option<PairedNode> {
    let pairs: &[Pair] = match scope {
        Scope::Body => {
            if let Some(code) = try_fence(cur) {
                return Some(PairedNode::CodeBlock(code.to_string()));
            }
            if cur.peek() == Some(b'\n') {
                cur.bump();
                return Some(PairedNode::LineBreak);
            }
            &Pair::BODY
        }
        Scope::Inline => &Pair::INLINE,
    };

    for &pair in pairs {
        if let Some(content) = try_pair(cur, pair.delimiter()) {
            return Some(pair_node(pair, content));
        }
    }

    try_link(cur).map(|(label, url)| PairedNode::Link {
        label: label.to_string(),
        url: url.to_string(),
    })
}

fn pair_node(pair: Pair, content: &str) -> PairedNode {
    match pair {
        Pair::Heading(level) => PairedNode::Heading {
            level,
            children: parse_nodes(content, Scope::Inline),
        },
        Pair::ListItem(level) => PairedNode::ListItem {
            level,
            children: parse_nodes(content, Scope::Inline),
        },
        Pair::InlineCode => PairedNode::Code(content.to_string()),
        Pair::Bold => PairedNode::Bold(content.to_string()),
        Pair::Italic => PairedNode::Italic(content.to_string()),
        Pair::Image => PairedNode::Image {
            src: content.trim().to_string(),
        },
    }
}

/// Rest of the current line starting at byte `from`.
fn line_from(s: &str, from: usize) -> &str {
    let rest = &s[from..];
    rest.find(['\n', '\r']).map_or(rest, |end| &rest[..end])
}

/// Matches `delim content delim` within one line. Content is at least one
/// char and ends at the first closing delimiter after that char.
fn try_pair<'a>(cur: &mut Cursor<'a>, delim: &str) -> Option<&'a str> {
    if !cur.starts_with(delim.as_bytes()) {
        return None;
    }
    let line = line_from(cur.s, cur.pos() + delim.len());
    let first = line.chars().next()?.len_utf8();
    let close = line[first..].find(delim)? + first;

    cur.bump_n(delim.len() * 2 + close);
    Some(&line[..close])
}

/// Matches a fenced code block, which may span lines and may be empty.
fn try_fence<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if !cur.starts_with(Fence::DELIM.as_bytes()) {
        return None;
    }
    let rest = &cur.s[cur.pos() + Fence::DELIM.len()..];
    let close = rest.find(Fence::DELIM)?;

    cur.bump_n(Fence::DELIM.len() * 2 + close);
    Some(&rest[..close])
}

/// Matches `@label=http(s)://url@` on one line. The label is the shortest
/// prefix followed by `=` and a scheme; the url ends at the next `@`.
fn try_link<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if cur.peek() != Some(PairedLink::DELIM) {
        return None;
    }
    let line = line_from(cur.s, cur.pos() + 1);

    for (sep, _) in line.match_indices(PairedLink::SEPARATOR).filter(|(i, _)| *i > 0) {
        let target = &line[sep + 1..];
        let Some(scheme) = PairedLink::SCHEMES.iter().find(|s| target.starts_with(**s)) else {
            continue;
        };
        let after_scheme = &target[scheme.len()..];
        let Some(first) = after_scheme.chars().next().map(char::len_utf8) else {
            continue;
        };
        let Some(close) = after_scheme[first..].find(PairedLink::DELIM as char) else {
            continue;
        };

        let url_len = scheme.len() + first + close;
        cur.bump_n(1 + sep + 1 + url_len + 1);
        return Some((&line[..sep], &target[..url_len]));
    }
    None
}
