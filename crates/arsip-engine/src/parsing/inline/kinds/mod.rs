//! # Inline Kinds
//!
//! Inline constructs and the delimiters they own. The parser refers to
//! these constants; it never hardcodes `^`, `*`, `~` or `` ` ``.
//!
//! - **`Link`**: `DELIM = b'^'`, resolved in the first pass
//! - **`Style`**: `Bold` (`*`), `Italic` (`~`), `Code` (`` ` ``), second pass

pub mod link;
pub mod style;

pub use link::Link;
pub use style::Style;
