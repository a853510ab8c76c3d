use super::kinds::{Heading, Image, ListItem};

/// What a line prefix opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOpen {
    Heading { level: u8 },
    ListItem { level: u8 },
    Image,
    Paragraph,
}

/// Matches the prefix of a trimmed line and returns what it opens together
/// with the trimmed remainder.
///
/// Precedence: headings, then list items, then images; longest marker run
/// first within each kind. Anything else is a paragraph covering the whole
/// line.
pub fn open_line(trimmed: &str) -> (LineOpen, &str) {
    if let Some(level) = Heading::level(trimmed) {
        return (LineOpen::Heading { level }, strip(trimmed, level));
    }
    if let Some(level) = ListItem::level(trimmed) {
        return (LineOpen::ListItem { level }, strip(trimmed, level));
    }
    if let Some(src) = Image::source(trimmed) {
        return (LineOpen::Image, src);
    }
    (LineOpen::Paragraph, trimmed)
}

/// Drops a marker run of `len` ASCII bytes and trims what follows.
fn strip(line: &str, len: u8) -> &str {
    line[len as usize..].trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("### heading", LineOpen::Heading { level: 3 }, "heading")]
    #[case("## heading", LineOpen::Heading { level: 2 }, "heading")]
    #[case("# heading", LineOpen::Heading { level: 1 }, "heading")]
    #[case("--- deep", LineOpen::ListItem { level: 3 }, "deep")]
    #[case("-- mid", LineOpen::ListItem { level: 2 }, "mid")]
    #[case("- top", LineOpen::ListItem { level: 1 }, "top")]
    #[case("@@ img.png", LineOpen::Image, "img.png")]
    #[case("plain words", LineOpen::Paragraph, "plain words")]
    #[case("", LineOpen::Paragraph, "")]
    #[case("----", LineOpen::ListItem { level: 3 }, "-")]
    fn prefix_precedence(#[case] line: &str, #[case] open: LineOpen, #[case] rest: &str) {
        assert_eq!(open_line(line), (open, rest));
    }
}
