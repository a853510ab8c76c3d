use serde::Serialize;

/// A node of a paired-delimiter article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PairedNode {
    Text(String),
    /// A newline in the body.
    LineBreak,
    /// ```` ```...``` ```` content, kept raw across lines.
    CodeBlock(String),
    /// `#..#`, `##..##` or `###..###`; content parsed with the inline pairs.
    Heading { level: u8, children: Vec<PairedNode> },
    /// `-..-`, `--..--` or `---..---`; content parsed with the inline pairs.
    ListItem { level: u8, children: Vec<PairedNode> },
    /// `**..**`
    Code(String),
    Bold(String),
    Italic(String),
    /// `$src$`
    Image { src: String },
    Link { label: String, url: String },
}

/// A parsed paired-delimiter article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairedDoc {
    pub title: String,
    pub nodes: Vec<PairedNode>,
}
