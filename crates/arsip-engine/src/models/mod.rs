pub mod article;

pub use article::{
    ARTICLE_EXTENSION, ArticleRecord, ArticleUrlBuilder, ViewPageUrl, page_title_from_path,
};
