use super::marker_run;

/// `-`, `--` or `---` list item prefix; the run length is the nesting level.
pub struct ListItem;

impl ListItem {
    pub const MARKER: u8 = b'-';

    pub fn level(line: &str) -> Option<u8> {
        match marker_run(line, Self::MARKER) {
            0 => None,
            n => Some(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_levels() {
        assert_eq!(ListItem::level("- a"), Some(1));
        assert_eq!(ListItem::level("-- a"), Some(2));
        assert_eq!(ListItem::level("--- a"), Some(3));
        assert_eq!(ListItem::level("----"), Some(3));
        assert_eq!(ListItem::level("a - b"), None);
    }
}
