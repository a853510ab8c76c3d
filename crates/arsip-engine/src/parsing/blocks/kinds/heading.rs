use super::marker_run;

/// `#`, `##` or `###` heading prefix.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';

    /// Heading level of a trimmed line, if it starts with the marker.
    /// The level is also the prefix length to strip.
    pub fn level(line: &str) -> Option<u8> {
        match marker_run(line, Self::MARKER) {
            0 => None,
            n => Some(n),
        }
    }
}
