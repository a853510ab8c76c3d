/// Paired-delimiter styles recognized outside links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Code,
}

impl Style {
    /// Every style, in the order they are tried at a position.
    pub const ALL: [Style; 3] = [Style::Bold, Style::Italic, Style::Code];

    pub const fn delimiter(self) -> u8 {
        match self {
            Style::Bold => b'*',
            Style::Italic => b'~',
            Style::Code => b'`',
        }
    }

    pub fn from_delimiter(b: u8) -> Option<Style> {
        Self::ALL.into_iter().find(|s| s.delimiter() == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_round_trip() {
        for style in Style::ALL {
            assert_eq!(Style::from_delimiter(style.delimiter()), Some(style));
        }
        assert_eq!(Style::from_delimiter(b'^'), None);
    }
}
