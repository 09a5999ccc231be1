use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use deltascope_config::Config;
use deltascope_engine::{
    FormulaProcessor, SimpleTypesetter, Summary, compile,
    delta::{format_json, samples},
    io, summarize, validate,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::{env, io::stdout, path::PathBuf, process};

mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Json,
    Preview,
}

struct App {
    raw: String,
    source_name: String,
    json_lines: Vec<String>,
    preview_lines: Vec<String>,
    summary: Summary,
    valid: bool,
    focus: Pane,
    json_scroll: u16,
    preview_scroll: u16,
}

impl App {
    fn new(raw: String, source_name: String) -> Self {
        let mut app = Self {
            raw,
            source_name,
            json_lines: Vec::new(),
            preview_lines: Vec::new(),
            summary: Summary::default(),
            valid: false,
            focus: Pane::Preview,
            json_scroll: 0,
            preview_scroll: 0,
        };
        app.refresh();
        app
    }

    /// Full recomputation from the raw buffer: validate, compile, project.
    fn refresh(&mut self) {
        self.json_lines = format_json(&self.raw).lines().map(str::to_string).collect();

        let formulas = FormulaProcessor::<SimpleTypesetter>::default();
        match validate(&self.raw) {
            Ok(delta) => {
                let nodes = compile(Some(&delta), &formulas);
                self.preview_lines = view::render_lines(&nodes);
                self.summary = summarize(Some(&delta));
                self.valid = true;
            }
            Err(e) => {
                self.preview_lines = vec![format!("✗ {e}")];
                self.summary = summarize(None);
                self.valid = false;
            }
        }
    }

    fn reformat(&mut self) {
        self.raw = format_json(&self.raw);
        self.refresh();
    }

    fn scroll_down(&mut self) {
        match self.focus {
            Pane::Json => self.json_scroll = self.json_scroll.saturating_add(1),
            Pane::Preview => self.preview_scroll = self.preview_scroll.saturating_add(1),
        }
    }

    fn scroll_up(&mut self) {
        match self.focus {
            Pane::Json => self.json_scroll = self.json_scroll.saturating_sub(1),
            Pane::Preview => self.preview_scroll = self.preview_scroll.saturating_sub(1),
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Json => Pane::Preview,
            Pane::Preview => Pane::Json,
        };
    }

    fn status_line(&self) -> String {
        let state = if self.valid {
            "✓ Delta rendered"
        } else {
            "✗ Invalid Delta"
        };
        format!(
            "{} | {} operations | {}",
            state, self.summary.op_count, self.source_name
        )
    }
}

fn main() -> Result<()> {
    // Determine the document from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let document_path = if args.len() == 2 {
        Some(PathBuf::from(&args[1]))
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => Some(config.document_path),
            Ok(None) => None,
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} [delta-json-file]", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [delta-json-file]", args[0]);
        process::exit(1);
    };

    let (raw, source_name) = match &document_path {
        Some(path) => match io::read_document(path) {
            Ok(text) => (text, path.display().to_string()),
            Err(e) => {
                eprintln!("Error: Failed to read '{}': {e}", path.display());
                process::exit(1);
            }
        },
        // No path given anywhere: open the built-in sample document.
        None => (samples::SIMPLE.to_string(), "built-in sample".to_string()),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(raw, source_name);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Tab => app.toggle_focus(),
                KeyCode::Char('f') => app.reformat(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(outer[0]);

    let focused = Style::default().fg(Color::Yellow);
    let unfocused = Style::default();

    let json_block = Block::default()
        .borders(Borders::ALL)
        .title("Delta JSON")
        .border_style(if app.focus == Pane::Json { focused } else { unfocused });
    let json = Paragraph::new(
        app.json_lines.iter().map(|l| Line::raw(l.clone())).collect::<Vec<_>>(),
    )
    .block(json_block)
    .scroll((app.json_scroll, 0));
    f.render_widget(json, panes[0]);

    let preview_block = Block::default()
        .borders(Borders::ALL)
        .title("Preview")
        .border_style(if app.focus == Pane::Preview { focused } else { unfocused });
    let preview = Paragraph::new(
        app.preview_lines.iter().map(|l| Line::raw(l.clone())).collect::<Vec<_>>(),
    )
    .block(preview_block)
    .scroll((app.preview_scroll, 0));
    f.render_widget(preview, panes[1]);

    let status = Paragraph::new(Line::raw(format!(
        "{} | q: Quit | Tab: Switch pane | j/k: Scroll | f: Format",
        app.status_line()
    )));
    f.render_widget(status, outer[1]);
}
