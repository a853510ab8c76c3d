mod app;
mod view;

use anyhow::{Context, Result};
use app::{App, Mode};
use arsip_config::Config;
use arsip_engine::{DirSource, TextSource, io, parse_article, render::render_article};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use relative_path::RelativePath;
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let loaded = match Config::load() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let from_config = loaded.is_some();
    let config = loaded.unwrap_or_default();

    let bin = args.first().map_or("arsip", String::as_str);

    let archive_path = match parse_args(&args) {
        Command::Render(file) => return render(&config, file),
        Command::Browse(Some(path)) => path,
        Command::Browse(None) if from_config => {
            log::info!("using archive path from {}", config_path.display());
            config.archive_path.clone()
        }
        Command::Browse(None) => {
            eprintln!("Error: No archive path provided and no config file found");
            eprintln!("Usage: {bin} <archive-path>");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        Command::Usage => {
            eprintln!("Usage: {bin} [archive-path]");
            eprintln!("       {bin} render <article-file>");
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_archive_dir(&archive_path) {
        let source = if from_config && args.len() == 1 {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Archive path '{}'{} is invalid: {e}",
            archive_path.display(),
            source
        );
        process::exit(1);
    }

    let mut app = App::new(config, archive_path)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Open the browser on an explicit archive path, or the configured one.
    Browse(Option<PathBuf>),
    Render(PathBuf),
    Usage,
}

fn parse_args(args: &[String]) -> Command {
    match args {
        [_, cmd, file] if cmd == "render" => Command::Render(PathBuf::from(file)),
        [_, cmd] if cmd == "render" => Command::Usage,
        [_, path] => Command::Browse(Some(PathBuf::from(path))),
        [_] | [] => Command::Browse(None),
        _ => Command::Usage,
    }
}

/// `arsip render <file>`: prints one article as HTML.
fn render(config: &Config, file: PathBuf) -> Result<()> {
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("not a file name: {}", file.display()))?;
    let dir = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let source = DirSource::new(dir)?;
    let text = match source.fetch_text(RelativePath::new(name)) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("{e}");
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    let article = parse_article(&text, config.markup_profile);
    print!("{}", render_article(&article));
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.mode {
            Mode::Search => match key.code {
                KeyCode::Esc | KeyCode::Enter => app.finish_search(),
                KeyCode::Backspace => app.pop_query_char(),
                KeyCode::Char(c) => app.push_query_char(c),
                _ => {}
            },
            Mode::Browse => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_item(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_item(),
                KeyCode::Right | KeyCode::Char('n') => app.next_page(),
                KeyCode::Left | KeyCode::Char('p') => app.previous_page(),
                KeyCode::Enter => app.open_selected(),
                KeyCode::Esc => app.close_article(),
                KeyCode::Char('/') => app.start_search(),
                _ => {}
            },
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[1]);

    // Search box
    let search_style = match app.mode {
        Mode::Search => Style::default().fg(Color::Yellow),
        Mode::Browse => Style::default(),
    };
    let search = Paragraph::new(app.query.as_str()).style(search_style).block(
        Block::default().borders(Borders::ALL).title(format!(
            "Search ({}/{})",
            app.matching_records(),
            app.total_records()
        )),
    );
    f.render_widget(search, rows[0]);

    // Listing panel
    let visible = app.visible();
    let items: Vec<ListItem> = if visible.is_empty() {
        vec![ListItem::new("No articles found.")]
    } else {
        visible
            .iter()
            .map(|r| {
                let mut spans = vec![Span::raw(r.title.clone())];
                let meta = [r.category.as_str(), r.date.as_str()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(" | ");
                if !meta.is_empty() {
                    spans.push(Span::styled(
                        format!("  {meta}"),
                        Style::default().add_modifier(Modifier::DIM),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Articles {}", app.pager_label())),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, panes[0], &mut app.list_state);

    // Content panel
    let (title, content_text) = match &app.article {
        Some(article) => (article.title.clone(), article.lines.clone()),
        None => (
            "Article".to_string(),
            vec![Line::from("Select an article and press Enter")],
        ),
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: true });

    f.render_widget(content, panes[1]);

    // Instructions
    let help_text = match app.mode {
        Mode::Search => Line::from("Type to filter | Backspace: Delete | Enter/Esc: Done"),
        Mode::Browse => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k ↓/j: Move | "),
            Span::raw("←/p →/n: Page | "),
            Span::raw("Enter: Open | Esc: Close | /: Search"),
        ]),
    };

    f.render_widget(Paragraph::new(help_text), rows[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn render_needs_a_file() {
        assert_eq!(parse_args(&args(&["arsip", "render"])), Command::Usage);
        assert_eq!(
            parse_args(&args(&["arsip", "render", "post.txt"])),
            Command::Render(PathBuf::from("post.txt"))
        );
    }

    #[test]
    fn archive_path_is_optional() {
        assert_eq!(parse_args(&args(&["arsip"])), Command::Browse(None));
        assert_eq!(
            parse_args(&args(&["arsip", "/srv/blog"])),
            Command::Browse(Some(PathBuf::from("/srv/blog")))
        );
        assert_eq!(parse_args(&args(&["arsip", "a", "b"])), Command::Usage);
    }
}
