//! Roster TUI - Actor-based speaker roster with simulated request latency
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Store Layer (Tokio) - delayed writes against the roster collection

mod app;
mod constants;
mod messages;
mod models;
mod seed;
mod store;
mod theme;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use constants::{
    APP_NAME, DEFAULT_DELAY_MS, DELAY_ENV_VAR, FAIL_ENV_VAR, PLACEHOLDER_ROWS, THEME_ENV_VAR,
};
use messages::ui_events::key_to_ui_event;
use messages::{RenderState, StoreCommand, StoreUpdate, UiEvent};
use models::RequestStatus;
use store::StoreActor;
use theme::{Theme, ThemeProvider};
use ui::{accent_color, base_style, favorite_marker, speaker_line, status_color};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "roster.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Seed roster: optional path argument, embedded data otherwise
    let speakers = match std::env::args().nth(1) {
        Some(path) => seed::load_seed(Path::new(&path))?,
        None => seed::default_seed()?,
    };
    tracing::info!(count = speakers.len(), "seed roster loaded");

    let delay = simulated_delay();
    let starting_theme = starting_theme();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (store_cmd_tx, store_cmd_rx) = mpsc::unbounded_channel::<StoreCommand>();
    let (store_update_tx, store_update_rx) = mpsc::unbounded_channel::<StoreUpdate>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn store actor
    let mut store_actor = StoreActor::new(speakers, delay, store_update_tx);
    if let Ok(message) = std::env::var(FAIL_ENV_VAR) {
        let message = if message.is_empty() {
            String::from("simulated load failure")
        } else {
            message
        };
        store_actor = store_actor.with_failure(message);
    }
    tokio::spawn(store_actor.run(store_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(ThemeProvider::new(starting_theme), store_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, store_update_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Simulated latency for the load and every update
fn simulated_delay() -> Duration {
    let ms = std::env::var(DELAY_ENV_VAR)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_DELAY_MS);
    Duration::from_millis(ms)
}

fn starting_theme() -> Theme {
    std::env::var(THEME_ENV_VAR)
        .ok()
        .and_then(|v| Theme::parse(&v))
        .unwrap_or_default()
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.show_help) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    f.render_widget(Block::default().style(base_style(state.theme)), area);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Roster content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, main_chunks[0]);

    // Three mutually exclusive content modes
    match state.status {
        RequestStatus::Failure => draw_error(f, state, main_chunks[1]),
        RequestStatus::Loading => draw_placeholder(f, state, main_chunks[1]),
        RequestStatus::Success => draw_roster(f, state, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, state, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let accent = accent_color(state.theme);

    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default().fg(accent).bold(),
        ),
        Span::styled(
            format!(" {} ", state.status.as_str()),
            Style::default().fg(status_color(state.status)),
        ),
    ]);

    let right = Line::from(format!(
        " {} favorites | theme: {} ",
        state.favorite_count(),
        state.theme.as_str(),
    ))
    .right_aligned();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(title)
        .title_top(right);

    f.render_widget(block, area);
}

fn draw_error(f: &mut Frame, state: &RenderState, area: Rect) {
    let message = state
        .error
        .as_deref()
        .unwrap_or("loading speaker data failed");

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Error ");

    let error = Paragraph::new(Line::from(vec![
        Span::styled("ERROR: ", Style::default().fg(Color::Red).bold()),
        Span::raw(message),
    ]))
    .block(block)
    .wrap(Wrap { trim: false });

    f.render_widget(error, area);
}

fn draw_placeholder(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Speakers (loading...) ");

    // Fixed-size skeleton, independent of the eventual row count
    let lines: Vec<Line> = (0..PLACEHOLDER_ROWS)
        .map(|_| {
            Line::from(Span::styled(
                "▒▒▒ ▒▒▒▒▒▒▒▒▒▒▒▒  ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒",
                Style::default().fg(Color::DarkGray),
            ))
        })
        .collect();

    let placeholder = Paragraph::new(lines)
        .block(block)
        .style(base_style(state.theme));
    f.render_widget(placeholder, area);
}

fn draw_roster(f: &mut Frame, state: &RenderState, area: Rect) {
    let accent = accent_color(state.theme);

    let items: Vec<ListItem> = state
        .speakers
        .iter()
        .map(|speaker| {
            let pending = state.pending.contains(&speaker.id);
            let style = if speaker.favorite {
                Style::default().fg(accent)
            } else {
                Style::default()
            };
            ListItem::new(speaker_line(speaker, pending)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Speakers ({}) ", state.speakers.len())),
        )
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.speakers.is_empty() {
        list_state.select(Some(state.selected));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = match &state.status_line {
        Some(message) => format!(" {message} "),
        None => String::from(
            " ↑/↓:select | f/Enter:favorite | t:theme | ?:help | q:quit ",
        ),
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(50, 50, area);

    let help_text = format!(
        r#"
 {APP_NAME} - Keyboard Shortcuts

 NAVIGATION
   ↑ / k              Previous speaker
   ↓ / j              Next speaker

 ROSTER
   f / Enter          Toggle favorite ({})

 APPEARANCE
   t                  Toggle theme (light/dark)

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#,
        favorite_marker(true),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(base_style(state.theme));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
