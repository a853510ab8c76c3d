use crate::models::ArticleRecord;

use super::RECORD_SEPARATOR;

/// Parses a catalog manifest: one article per line,
/// `thumbnail|title|preview|date|file|category`.
///
/// Blank lines and rows without a title are dropped.
pub fn parse(blob: &str) -> Vec<ArticleRecord> {
    blob.lines().filter_map(parse_row).collect()
}

fn parse_row(line: &str) -> Option<ArticleRecord> {
    if line.trim().is_empty() {
        return None;
    }

    let mut fields = line.split(RECORD_SEPARATOR).map(str::trim);
    let mut next = || fields.next().unwrap_or_default().to_string();

    let thumbnail = next();
    let title = next();
    let preview = next();
    let date = next();
    let file = next();
    let category = next();

    if title.is_empty() {
        log::debug!("dropping catalog row without title: {line:?}");
        return None;
    }

    Some(ArticleRecord {
        title,
        category,
        thumbnail,
        preview,
        date,
        file,
    })
}
