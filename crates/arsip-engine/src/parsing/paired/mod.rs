//! # Paired-delimiter Markup
//!
//! The older article dialect, where constructs are wrapped on both sides
//! (`#Title#`, `*bold*`, `-item-`) instead of being introduced by a line
//! prefix. It is a separate profile, never mixed with the line-prefix
//! grammar: the same text means different things in each.
//!
//! ## Document shape
//!
//! The first line carries the title as `#...#`; everything after it is the
//! body. Newlines in the body are significant and become line breaks.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiters (`Pair`, `Fence`, `PairedLink`)
//! - **`types`**: `PairedNode`, `PairedDoc`
//! - **`parser`**: `parse_paired()` entry point

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{DEFAULT_TITLE, extract_title, parse_paired};
pub use types::{PairedDoc, PairedNode};
