/// `@@source` image line.
pub struct Image;

impl Image {
    pub const PREFIX: &'static str = "@@";

    /// Image source of a trimmed line, if it is an image line.
    pub fn source(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}
