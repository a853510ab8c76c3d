use relative_path::{RelativePath, RelativePathBuf};
use serde::Serialize;

use crate::sanitize::{InvalidFileName, sanitize_file_name};

/// Extension of article body files when the path is derived from the title.
pub const ARTICLE_EXTENSION: &str = "txt";

/// One entry of the article manifest.
///
/// Fields are positional in the manifest; a missing field is an empty
/// string, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    pub title: String,
    pub category: String,
    pub thumbnail: String,
    pub preview: String,
    /// Publication date as written in a catalog manifest.
    pub date: String,
    /// Explicit body file name (catalog manifests); empty means "derive from title".
    pub file: String,
}

impl ArticleRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Relative path of the article body below `articles_dir`.
    ///
    /// Uses the explicit `file` when the record has one, otherwise
    /// `<title>.txt`. Either way the name goes through [`sanitize_file_name`];
    /// an empty sanitized name is rejected so no partial path is ever built.
    pub fn article_path(
        &self,
        articles_dir: &RelativePath,
    ) -> Result<RelativePathBuf, InvalidFileName> {
        let (raw, file_name) = if self.file.is_empty() {
            let safe = sanitize_file_name(&self.title)?;
            let name = format!("{safe}.{ARTICLE_EXTENSION}");
            (&self.title, (!safe.is_empty()).then_some(name))
        } else {
            let safe = sanitize_file_name(&self.file)?;
            (&self.file, (!safe.is_empty()).then_some(safe))
        };

        match file_name {
            Some(name) => Ok(articles_dir.join(name)),
            None => Err(InvalidFileName::EmptyAfterSanitize(raw.clone())),
        }
    }
}

/// Builds the link a listing entry points at.
pub trait ArticleUrlBuilder {
    /// `article_path` is always the output of [`ArticleRecord::article_path`].
    fn build(&self, article_path: &RelativePath) -> String;
}

/// Links to a viewer page taking the article path as a `file` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPageUrl {
    pub page: String,
}

impl Default for ViewPageUrl {
    fn default() -> Self {
        Self {
            page: "view.html".to_string(),
        }
    }
}

impl ArticleUrlBuilder for ViewPageUrl {
    fn build(&self, article_path: &RelativePath) -> String {
        format!(
            "{}?file={}",
            self.page,
            urlencoding::encode(article_path.as_str())
        )
    }
}

/// Human-readable title for an article path: last path segment, `.txt`
/// removed, `-` and `_` shown as spaces.
pub fn page_title_from_path(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    let suffix = format!(".{ARTICLE_EXTENSION}");
    name.replacen(&suffix, "", 1).replace(['-', '_'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn data_dir() -> &'static RelativePath {
        RelativePath::new("data")
    }

    #[test]
    fn path_from_title() {
        let record = ArticleRecord::new("Belajar Rust: bagian 1");
        assert_eq!(
            record.article_path(data_dir()).unwrap(),
            RelativePathBuf::from("data/Belajar Rust: bagian 1.txt")
        );
    }

    #[test]
    fn path_from_explicit_file() {
        let record = ArticleRecord {
            title: "Anything".into(),
            file: "post-01.txt".into(),
            ..ArticleRecord::default()
        };
        assert_eq!(
            record.article_path(data_dir()).unwrap(),
            RelativePathBuf::from("data/post-01.txt")
        );
    }

    #[test]
    fn traversal_title_has_no_path() {
        let record = ArticleRecord::new("../secret");
        assert!(matches!(
            record.article_path(data_dir()),
            Err(InvalidFileName::Traversal(_))
        ));
    }

    #[test]
    fn fully_stripped_title_has_no_path() {
        let record = ArticleRecord::new("???");
        assert_eq!(
            record.article_path(data_dir()),
            Err(InvalidFileName::EmptyAfterSanitize("???".into()))
        );
    }

    #[test]
    fn view_page_url_encodes_path() {
        let path = RelativePathBuf::from("data/Café au lait.txt");
        assert_eq!(
            ViewPageUrl::default().build(&path),
            "view.html?file=data%2FCaf%C3%A9%20au%20lait.txt"
        );
    }

    #[test]
    fn page_title_strips_directory_and_extension() {
        assert_eq!(page_title_from_path("data/my-first_post.txt"), "my first post");
        assert_eq!(page_title_from_path("plain"), "plain");
    }
}
