use crate::manifest::{self, ManifestFormat};
use crate::models::ArticleRecord;
use crate::sanitize::InvalidFileName;
use relative_path::{Component, RelativePath};
use std::fs;
use std::path::{Path, PathBuf};

/// Shown in place of an article whose body could not be fetched.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to open file.";

/// Shown in place of an article whose file name was rejected.
pub const INVALID_NAME_MESSAGE: &str = "Invalid file name.";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid archive directory: {0}")]
    InvalidArchiveDir(String),
    #[error("Invalid file name: {0}")]
    InvalidFileName(#[from] InvalidFileName),
}

impl IoError {
    /// The static message a reader sees for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            IoError::InvalidFileName(_) => INVALID_NAME_MESSAGE,
            _ => FETCH_FAILURE_MESSAGE,
        }
    }
}

/// Where manifest and article text comes from.
pub trait TextSource {
    fn fetch_text(&self, path: &RelativePath) -> Result<String, IoError>;
}

/// Reads text files below an archive root directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, IoError> {
        let root = root.into();
        validate_archive_dir(&root)?;
        Ok(Self { root })
    }
}

impl TextSource for DirSource {
    fn fetch_text(&self, path: &RelativePath) -> Result<String, IoError> {
        read_file(path, &self.root)
    }
}

/// Read a text file below `root`. Paths that climb out of `root` are rejected.
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    if relative_path
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(InvalidFileName::Traversal(relative_path.to_string()).into());
    }

    let absolute_path = relative_path.to_path(root);
    if !absolute_path.is_file() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

pub fn validate_archive_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidArchiveDir(format!(
            "Directory does not exist: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Fetch and parse the manifest.
pub fn load_manifest(
    source: &impl TextSource,
    manifest_file: &RelativePath,
    format: ManifestFormat,
) -> Result<Vec<ArticleRecord>, IoError> {
    let blob = source.fetch_text(manifest_file)?;
    let records = manifest::parse_with(format, &blob);
    log::info!("loaded {} articles from {manifest_file}", records.len());
    Ok(records)
}

/// Fetch the body of `record` from below `articles_dir`.
pub fn load_article(
    source: &impl TextSource,
    record: &ArticleRecord,
    articles_dir: &RelativePath,
) -> Result<String, IoError> {
    let path = record.article_path(articles_dir).inspect_err(|e| {
        log::debug!("not fetching {:?}: {e}", record.title);
    })?;
    source.fetch_text(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_archive_dir, create_test_file};

    #[test]
    fn test_load_manifest_and_article() {
        // Given an archive with a manifest and one article
        let archive = create_test_archive_dir();
        create_test_file(&archive, "data.txt", "Hello World-Notes|Missing");
        create_test_file(&archive, "data/Hello World.txt", "# Hello\n- item");
        let source = DirSource::new(archive.path()).unwrap();

        // When loading the manifest
        let records = load_manifest(
            &source,
            RelativePath::new("data.txt"),
            ManifestFormat::Delimited,
        )
        .unwrap();

        // Then both records are listed and the first body can be fetched
        assert_eq!(records.len(), 2);
        let body = load_article(&source, &records[0], RelativePath::new("data")).unwrap();
        assert_eq!(body, "# Hello\n- item");

        // And the second one fails with the fetch fallback
        let err = load_article(&source, &records[1], RelativePath::new("data")).unwrap_err();
        assert!(matches!(err, IoError::NotFound(_)));
        assert_eq!(err.user_message(), FETCH_FAILURE_MESSAGE);
    }

    #[test]
    fn test_catalog_manifest_uses_explicit_file() {
        let archive = create_test_archive_dir();
        create_test_file(&archive, "main.txt", "t.png|Judul|p|2024-01-01|post-1.txt|Umum\n");
        create_test_file(&archive, "data/post-1.txt", "#Judul#\nisi");
        let source = DirSource::new(archive.path()).unwrap();

        let records = load_manifest(
            &source,
            RelativePath::new("main.txt"),
            ManifestFormat::Catalog,
        )
        .unwrap();
        let body = load_article(&source, &records[0], RelativePath::new("data")).unwrap();
        assert_eq!(body, "#Judul#\nisi");
    }

    #[test]
    fn test_rejected_title_is_not_fetched() {
        let archive = create_test_archive_dir();
        let source = DirSource::new(archive.path()).unwrap();

        let err = load_article(&source, &ArticleRecord::new("a/b"), RelativePath::new("data"))
            .unwrap_err();
        assert!(matches!(
            err,
            IoError::InvalidFileName(InvalidFileName::Traversal(_))
        ));
        assert_eq!(err.user_message(), INVALID_NAME_MESSAGE);

        let err = load_article(&source, &ArticleRecord::new("???"), RelativePath::new("data"))
            .unwrap_err();
        assert!(matches!(
            err,
            IoError::InvalidFileName(InvalidFileName::EmptyAfterSanitize(_))
        ));
    }

    #[test]
    fn test_read_file_rejects_parent_components() {
        let archive = create_test_archive_dir();
        let result = read_file(RelativePath::new("../etc/passwd"), archive.path());
        assert!(matches!(result, Err(IoError::InvalidFileName(_))));
    }

    #[test]
    fn test_read_file_not_found() {
        let archive = create_test_archive_dir();
        let result = read_file(RelativePath::new("nonexistent.txt"), archive.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let archive = create_test_archive_dir();
        std::fs::create_dir(archive.path().join("data")).unwrap();
        let result = read_file(RelativePath::new("data"), archive.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_validate_archive_dir() {
        let archive = create_test_archive_dir();
        assert!(validate_archive_dir(archive.path()).is_ok());

        let result = DirSource::new("/nonexistent/path");
        assert!(matches!(result, Err(IoError::InvalidArchiveDir(_))));
    }
}
