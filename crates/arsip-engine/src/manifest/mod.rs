//! # Manifest Parsing
//!
//! The manifest lists every article of the archive. Two layouts exist:
//!
//! - **Delimited** (`data.txt`): records separated by `|`, positional
//!   sub-fields separated by `-` (title, category, thumbnail, preview).
//! - **Catalog** (`main.txt`): one record per line, `|`-separated
//!   thumbnail, title, preview, date, file and category.
//!
//! Neither layout has an escaping mechanism, so a literal `|` or `-` inside
//! a field cannot be expressed. Parsing is total: bad rows are dropped,
//! never reported.

pub mod catalog;

use serde::{Deserialize, Serialize};

use crate::models::ArticleRecord;

pub const RECORD_SEPARATOR: char = '|';
pub const FIELD_SEPARATOR: char = '-';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManifestFormat {
    #[default]
    Delimited,
    Catalog,
}

/// Parses a delimited manifest blob into article records.
///
/// Entries whose title is empty after trimming are dropped, which also
/// takes care of the empty entry produced by a trailing `|`.
pub fn parse(blob: &str) -> Vec<ArticleRecord> {
    blob.split(RECORD_SEPARATOR)
        .filter_map(parse_entry)
        .collect()
}

/// Parses `blob` according to `format`.
pub fn parse_with(format: ManifestFormat, blob: &str) -> Vec<ArticleRecord> {
    match format {
        ManifestFormat::Delimited => parse(blob),
        ManifestFormat::Catalog => catalog::parse(blob),
    }
}

fn parse_entry(entry: &str) -> Option<ArticleRecord> {
    let mut fields = entry.splitn(5, FIELD_SEPARATOR).map(str::trim);
    let mut next = || fields.next().unwrap_or_default().to_string();

    let record = ArticleRecord {
        title: next(),
        category: next(),
        thumbnail: next(),
        preview: next(),
        ..ArticleRecord::default()
    };

    if record.title.is_empty() {
        if !entry.trim().is_empty() {
            log::debug!("dropping manifest entry without title: {entry:?}");
        }
        return None;
    }
    Some(record)
}
