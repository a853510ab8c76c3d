//! Listing helpers for the article index: keyword search and page
//! arithmetic. Both are pure; the caller owns the records and the current
//! page.

pub mod pages;
pub mod search;

pub use pages::{PageView, Pager};
pub use search::{SearchMode, filter, normalize_keyword};
