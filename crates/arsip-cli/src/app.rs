use anyhow::Result;
use arsip_config::Config;
use arsip_engine::{
    Article, ArticleRecord, DirSource, PageView, listing, load_article, load_manifest,
    page_title_from_path, parse_article,
};
use ratatui::{text::Line, widgets::ListState};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Search,
}

/// An opened article as shown in the content pane.
pub struct ArticleView {
    pub title: String,
    pub lines: Vec<Line<'static>>,
}

pub struct App {
    config: Config,
    source: DirSource,
    records: Vec<ArticleRecord>,
    /// Indices into `records` matching the current query.
    filtered: Vec<usize>,
    page: usize,
    pub query: String,
    pub mode: Mode,
    pub list_state: ListState,
    pub article: Option<ArticleView>,
}

impl App {
    pub fn new(config: Config, archive_path: PathBuf) -> Result<Self> {
        let source = DirSource::new(archive_path)?;
        let records = load_manifest(&source, &config.manifest_file, config.manifest_format)?;

        let mut app = Self {
            config,
            source,
            records,
            filtered: Vec::new(),
            page: 1,
            query: String::new(),
            mode: Mode::Browse,
            list_state: ListState::default(),
            article: None,
        };
        app.refilter();
        Ok(app)
    }

    pub fn page_view(&self) -> PageView {
        self.config.pager().view(self.filtered.len(), self.page)
    }

    /// Records shown on the current page.
    pub fn visible(&self) -> Vec<&ArticleRecord> {
        self.page_view()
            .slice(&self.filtered)
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    pub fn selected_record(&self) -> Option<&ArticleRecord> {
        let index = self.list_state.selected()?;
        self.visible().get(index).copied()
    }

    pub fn next_item(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous_item(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn next_page(&mut self) {
        if let Some(page) = self.page_view().next() {
            self.go_to_page(page);
        }
    }

    pub fn previous_page(&mut self) {
        if let Some(page) = self.page_view().previous() {
            self.go_to_page(page);
        }
    }

    fn go_to_page(&mut self, page: usize) {
        self.page = self.config.pager().view(self.filtered.len(), page).current;
        self.reset_selection();
    }

    pub fn start_search(&mut self) {
        self.mode = Mode::Search;
    }

    pub fn finish_search(&mut self) {
        self.mode = Mode::Browse;
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.refilter();
    }

    /// Re-runs the search and goes back to the first page.
    fn refilter(&mut self) {
        let keyword = listing::normalize_keyword(&self.query);
        let mode = self.config.search_mode;
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| mode.matches(r, &keyword))
            .map(|(i, _)| i)
            .collect();
        self.page = 1;
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        let selection = (!self.visible().is_empty()).then_some(0);
        self.list_state.select(selection);
    }

    /// Fetches, parses and shows the selected article. Failures are shown
    /// in place of the article body and only logged at debug level, since
    /// stderr is the terminal the browser draws on.
    pub fn open_selected(&mut self) {
        let Some(record) = self.selected_record().cloned() else {
            return;
        };

        let view = match load_article(&self.source, &record, &self.config.articles_dir) {
            Ok(text) => {
                let article = parse_article(&text, self.config.markup_profile);
                let title = match &article {
                    Article::Paired(doc) => doc.title.clone(),
                    Article::LinePrefix(_) => record
                        .article_path(&self.config.articles_dir)
                        .map(|p| page_title_from_path(p.as_str()))
                        .unwrap_or_else(|_| record.title.clone()),
                };
                ArticleView {
                    title,
                    lines: crate::view::article_lines(&article),
                }
            }
            Err(e) => {
                log::debug!("failed to open {:?}: {e}", record.title);
                ArticleView {
                    title: record.title.clone(),
                    lines: vec![Line::from(e.user_message())],
                }
            }
        };
        self.article = Some(view);
    }

    pub fn close_article(&mut self) {
        self.article = None;
    }

    /// `« First 1 [2] 3 Last »` style page links.
    pub fn pager_label(&self) -> String {
        let view = self.page_view();
        let mut parts = Vec::new();
        if view.show_first {
            parts.push("« First".to_string());
        }
        for page in view.window.clone() {
            if page == view.current {
                parts.push(format!("[{page}]"));
            } else {
                parts.push(page.to_string());
            }
        }
        if view.show_last {
            parts.push("Last »".to_string());
        }
        parts.join(" ")
    }

    pub fn total_records(&self) -> usize {
        self.records.len()
    }

    pub fn matching_records(&self) -> usize {
        self.filtered.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arsip_engine::{FETCH_FAILURE_MESSAGE, SearchMode};
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use pretty_assertions::assert_eq;
    use std::sync::{Mutex, Once};
    use tempfile::TempDir;

    static CAPTURED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            CAPTURED
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    fn capture_logs() {
        static INIT: Once = Once::new();
        static LOGGER: CaptureLogger = CaptureLogger;
        INIT.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(LevelFilter::Trace);
        });
    }

    fn logged_about(needle: &str) -> Vec<Level> {
        CAPTURED
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, msg)| msg.contains(needle))
            .map(|(level, _)| *level)
            .collect()
    }

    fn archive(titles: &[&str]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.txt"), titles.join("|")).unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        dir
    }

    fn app_with(dir: &TempDir, config: Config) -> App {
        App::new(config, dir.path().to_path_buf()).unwrap()
    }

    fn visible_titles(app: &App) -> Vec<String> {
        app.visible().iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn pages_through_listing() {
        let titles: Vec<String> = (1..=5).map(|i| format!("Post {i}")).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let dir = archive(&refs);
        let mut app = app_with(
            &dir,
            Config {
                page_size: 2,
                ..Config::default()
            },
        );

        assert_eq!(visible_titles(&app), vec!["Post 1", "Post 2"]);
        assert_eq!(app.pager_label(), "[1] 2 3");

        app.next_page();
        app.next_page();
        assert_eq!(visible_titles(&app), vec!["Post 5"]);
        assert_eq!(app.list_state.selected(), Some(0));

        app.next_page();
        assert_eq!(app.page_view().current, 3);
        app.previous_page();
        assert_eq!(visible_titles(&app), vec!["Post 3", "Post 4"]);
    }

    #[test]
    fn selection_wraps_within_page() {
        let dir = archive(&["A", "B", "C"]);
        let mut app = app_with(&dir, Config::default());

        app.previous_item();
        assert_eq!(app.selected_record().map(|r| r.title.as_str()), Some("C"));
        app.next_item();
        assert_eq!(app.selected_record().map(|r| r.title.as_str()), Some("A"));
    }

    #[test]
    fn search_filters_and_resets_page() {
        let dir = archive(&["Rust satu", "Go", "Rust dua", "Zig"]);
        let mut app = app_with(
            &dir,
            Config {
                page_size: 1,
                search_mode: SearchMode::Title,
                ..Config::default()
            },
        );
        app.next_page();
        assert_eq!(app.page_view().current, 2);

        app.start_search();
        for c in "RUST".chars() {
            app.push_query_char(c);
        }
        app.finish_search();

        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.matching_records(), 2);
        assert_eq!(app.total_records(), 4);
        assert_eq!(app.page_view().current, 1);

        app.pop_query_char();
        app.pop_query_char();
        app.pop_query_char();
        app.pop_query_char();
        assert_eq!(app.matching_records(), 4);
    }

    #[test]
    fn no_matches_leaves_nothing_selected() {
        let dir = archive(&["A"]);
        let mut app = app_with(&dir, Config::default());
        app.push_query_char('x');
        assert!(app.visible().is_empty());
        assert_eq!(app.list_state.selected(), None);
        assert_eq!(app.pager_label(), "");

        app.open_selected();
        assert!(app.article.is_none());
    }

    #[test]
    fn opens_article_with_title_from_path() {
        let dir = archive(&["my_first_post"]);
        std::fs::write(dir.path().join("data/my_first_post.txt"), "# Halo\nisi").unwrap();
        let mut app = app_with(&dir, Config::default());

        app.open_selected();
        let article = app.article.as_ref().unwrap();
        assert_eq!(article.title, "my first post");
        assert_eq!(article.lines.len(), 2);

        app.close_article();
        assert!(app.article.is_none());
    }

    #[test]
    fn missing_article_shows_fallback_message() {
        let dir = archive(&["Hilang"]);
        let mut app = app_with(&dir, Config::default());

        app.open_selected();
        let article = app.article.as_ref().unwrap();
        assert_eq!(article.lines, vec![Line::from(FETCH_FAILURE_MESSAGE)]);
    }

    #[test]
    fn failed_open_stays_out_of_the_terminal() {
        capture_logs();
        let dir = archive(&["Lenyap_tanpa_jejak"]);
        let mut app = app_with(&dir, Config::default());

        app.open_selected();
        let article = app.article.as_ref().unwrap();
        assert_eq!(article.title, "Lenyap_tanpa_jejak");
        assert_eq!(article.lines, vec![Line::from(FETCH_FAILURE_MESSAGE)]);

        let levels = logged_about("Lenyap_tanpa_jejak");
        assert_eq!(levels, vec![Level::Debug]);
    }

    #[test]
    fn missing_archive_is_an_error() {
        assert!(App::new(Config::default(), PathBuf::from("/nonexistent/archive")).is_err());
    }
}
