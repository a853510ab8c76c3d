use serde::{Deserialize, Serialize};

use crate::models::ArticleRecord;
use crate::sanitize::sanitize_search_input;

/// Which record fields a keyword is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Keyword contained in the title.
    #[default]
    Title,
    /// Keyword contained in title, preview, date or category.
    AnyField,
    /// First token contained in the category, the remaining tokens in the
    /// title. A single token searches titles only.
    CategoryTitle,
}

/// Lower-cases, strips characters outside the search whitelist and trims.
pub fn normalize_keyword(raw: &str) -> String {
    sanitize_search_input(&raw.to_lowercase()).trim().to_string()
}

impl SearchMode {
    /// Matches `record` against an already normalized keyword. The empty
    /// keyword matches everything.
    pub fn matches(self, record: &ArticleRecord, keyword: &str) -> bool {
        if keyword.is_empty() {
            return true;
        }
        let contains = |field: &str| field.to_lowercase().contains(keyword);

        match self {
            SearchMode::Title => contains(&record.title),
            SearchMode::AnyField => {
                contains(&record.title)
                    || contains(&record.preview)
                    || contains(&record.date)
                    || contains(&record.category)
            }
            SearchMode::CategoryTitle => {
                let mut tokens = keyword.split_whitespace();
                let category = tokens.next().unwrap_or_default();
                let title = tokens.collect::<Vec<_>>().join(" ");
                if title.is_empty() {
                    return SearchMode::Title.matches(record, keyword);
                }
                record.category.to_lowercase().contains(category)
                    && record.title.to_lowercase().contains(&title)
            }
        }
    }
}

/// Records matching the raw search box input, in manifest order.
pub fn filter<'a>(
    records: &'a [ArticleRecord],
    raw_keyword: &str,
    mode: SearchMode,
) -> Vec<&'a ArticleRecord> {
    let keyword = normalize_keyword(raw_keyword);
    records.iter().filter(|r| mode.matches(r, &keyword)).collect()
}
