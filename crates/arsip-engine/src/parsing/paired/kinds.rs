/// Constructs written as `delim content delim` on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pair {
    Heading(u8),
    InlineCode,
    Bold,
    Italic,
    ListItem(u8),
    Image,
}

impl Pair {
    /// Pairs recognized in the body, in the order they are tried at a
    /// position. Longer delimiters come before their prefixes.
    pub const BODY: [Pair; 10] = [
        Pair::Heading(3),
        Pair::Heading(2),
        Pair::Heading(1),
        Pair::InlineCode,
        Pair::Bold,
        Pair::Italic,
        Pair::ListItem(3),
        Pair::ListItem(2),
        Pair::ListItem(1),
        Pair::Image,
    ];

    /// Pairs recognized inside heading and list item content.
    pub const INLINE: [Pair; 4] = [Pair::InlineCode, Pair::Bold, Pair::Italic, Pair::Image];

    pub const fn delimiter(self) -> &'static str {
        match self {
            Pair::Heading(3) => "###",
            Pair::Heading(2) => "##",
            Pair::Heading(_) => "#",
            Pair::InlineCode => "**",
            Pair::Bold => "*",
            Pair::Italic => "~",
            Pair::ListItem(3) => "---",
            Pair::ListItem(2) => "--",
            Pair::ListItem(_) => "-",
            Pair::Image => "$",
        }
    }
}

/// Multi-line raw code block delimiter.
pub struct Fence;

impl Fence {
    pub const DELIM: &'static str = "```";
}

/// `@label=http://url@` link.
pub struct PairedLink;

impl PairedLink {
    pub const DELIM: u8 = b'@';
    pub const SEPARATOR: char = '=';
    pub const SCHEMES: [&'static str; 2] = ["https://", "http://"];
}
