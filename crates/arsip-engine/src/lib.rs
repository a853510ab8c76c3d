pub mod io;
pub mod listing;
pub mod manifest;
pub mod models;
pub mod parsing;
pub mod render;
pub mod sanitize;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use listing::{PageView, Pager, SearchMode};
pub use manifest::ManifestFormat;
pub use models::*;
pub use parsing::{Article, MarkupProfile, ParsedDoc, parse_article, parse_document};
pub use sanitize::{InvalidFileName, sanitize_file_name, sanitize_search_input};
