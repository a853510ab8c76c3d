//! # Inline Parsing
//!
//! Cursor-based parsing of a single line into typed spans.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Link, Bold, Italic, Code)
//! - **`kinds`**: constructs with their owned delimiters (`Link`, `Style`)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_inline()` entry point
//!
//! ## Precedence
//!
//! Links are resolved before styles: `^a*b*^` is one link whose label
//! keeps its asterisks, and a style can never span across a link.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
