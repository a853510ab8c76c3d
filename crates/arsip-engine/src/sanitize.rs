//! # File-name and search-keyword sanitizing
//!
//! Article titles double as file names, so every title goes through
//! [`sanitize_file_name`] before it is used to build a path or URL.
//! The traversal check runs on the raw name and again on the stripped one:
//! stripping can join two harmless characters into `..`, and a separator in
//! the raw name is rejected even though stripping would remove it.

use std::ops::RangeInclusive;

/// Latin-1 Supplement and Latin Extended-A, the accented letters we accept.
const ACCENTED_LATIN: RangeInclusive<char> = '\u{00C0}'..='\u{017F}';

/// Substrings that are never allowed in a sanitized file name.
const TRAVERSAL_PATTERNS: [&str; 3] = ["..", "/", "\\"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFileName {
    #[error("file name is empty")]
    Empty,
    #[error("file name contains a path traversal pattern: {0:?}")]
    Traversal(String),
    #[error("file name {0:?} has no allowed characters")]
    EmptyAfterSanitize(String),
}

fn is_file_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, ' ' | ',' | ':' | '_' | '-' | '.')
        || ACCENTED_LATIN.contains(&c)
}

fn has_traversal(s: &str) -> bool {
    TRAVERSAL_PATTERNS.iter().any(|p| s.contains(p))
}

fn is_search_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, ' ' | '_' | '-' | '.')
        || ACCENTED_LATIN.contains(&c)
}

/// Strips every character outside the file-name whitelist. Rejects names
/// that contain `..`, `/` or `\` before or after stripping.
///
/// An empty input is rejected up front. A non-empty input that strips down to
/// nothing is returned as `Ok("")`; callers building links decide what to do
/// with it (see [`crate::models::ArticleRecord::article_path`]).
pub fn sanitize_file_name(name: &str) -> Result<String, InvalidFileName> {
    if name.is_empty() {
        return Err(InvalidFileName::Empty);
    }

    if has_traversal(name) {
        log::debug!("rejected file name {name:?}: traversal pattern");
        return Err(InvalidFileName::Traversal(name.to_string()));
    }

    let safe: String = name.chars().filter(|c| is_file_name_char(*c)).collect();

    if has_traversal(&safe) {
        log::debug!("rejected file name {name:?}: traversal pattern after sanitizing");
        return Err(InvalidFileName::Traversal(safe));
    }

    Ok(safe)
}

/// Same as [`sanitize_file_name`] for callers holding an optional value;
/// `None` is treated like an empty name.
pub fn sanitize_optional_file_name(name: Option<&str>) -> Result<String, InvalidFileName> {
    sanitize_file_name(name.unwrap_or_default())
}

/// Normalizes a search keyword. Looser than the file-name whitelist and
/// without a traversal check, so the result must never end up in a path.
pub fn sanitize_search_input(input: &str) -> String {
    input.chars().filter(|c| is_search_char(*c)).collect()
}
