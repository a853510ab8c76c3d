//! Block kinds and the line prefixes they own.
//!
//! Headings and list items are both "marker runs": one to three repetitions
//! of a marker character, the longest run winning (`###` before `##`
//! before `#`).

pub mod heading;
pub mod image;
pub mod list_item;

pub use heading::Heading;
pub use image::Image;
pub use list_item::ListItem;

/// Deepest heading and list level the markup expresses.
pub const MAX_LEVEL: u8 = 3;

/// Length of the run of `marker` bytes at the start of `line`, capped at
/// [`MAX_LEVEL`]. Zero when the line does not start with `marker`.
pub(crate) fn marker_run(line: &str, marker: u8) -> u8 {
    line.bytes()
        .take(MAX_LEVEL as usize)
        .take_while(|b| *b == marker)
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_run_is_capped() {
        assert_eq!(marker_run("#### x", b'#'), 3);
        assert_eq!(marker_run("## x", b'#'), 2);
        assert_eq!(marker_run("x #", b'#'), 0);
        assert_eq!(marker_run("", b'-'), 0);
    }
}
