//! tubetui - terminal client for a video catalog
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! tubetui
//!
//! # CLI mode (for automation)
//! tubetui videos --json
//! tubetui info v42
//! tubetui watch v42 --player mpv
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc::{self, UnboundedSender};

use tubetui::api::CatalogClient;
use tubetui::app::{self, App, FetchOutcome, FetchRequest, InputMode, Screen};
use tubetui::cli::{self, Cli, Command, ExitCode, Output};
use tubetui::commands;
use tubetui::config::Config;
use tubetui::player::{LocalPlayer, PlayerKind};
use tubetui::ui::{self, Theme};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        run_tui(cli).await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);
    let api_url = cli.api_url.as_deref();

    match cli.command {
        Some(Command::Videos(cmd)) => commands::videos_cmd(cmd, api_url, &output).await,

        Some(Command::Info(cmd)) => {
            if let Err(e) = cli::validate_video_id(&cmd.id) {
                return output.error(e, ExitCode::InvalidArgs);
            }
            commands::info_cmd(cmd, api_url, &output).await
        }

        Some(Command::Comments(cmd)) => {
            if let Err(e) = cli::validate_video_id(&cmd.id) {
                return output.error(e, ExitCode::InvalidArgs);
            }
            commands::comments_cmd(cmd, api_url, &output).await
        }

        Some(Command::Watch(cmd)) => {
            if let Err(e) = cli::validate_video_id(&cmd.id) {
                return output.error(e, ExitCode::InvalidArgs);
            }
            commands::watch_cmd(cmd, api_url, &output).await
        }

        None => ExitCode::Success,
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(cli: Cli) -> Result<()> {
    let config = Config::load();
    let base_url = cli
        .api_url
        .clone()
        .unwrap_or_else(|| config.api_url());
    let client = CatalogClient::new(base_url);
    let player_kind = config
        .player
        .as_deref()
        .and_then(PlayerKind::from_name)
        .unwrap_or_default();

    let mut terminal = init_terminal()?;
    let mut app = App::new();

    let result = run_event_loop(&mut terminal, &mut app, client, player_kind).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Spawn one fetch sequence; the outcome comes back over the channel
/// tagged with its generation so stale results can be dropped.
fn spawn_fetch(request: FetchRequest, client: CatalogClient, tx: UnboundedSender<FetchOutcome>) {
    tokio::spawn(async move {
        let outcome = match request {
            FetchRequest::Catalog { generation } => FetchOutcome::Catalog {
                generation,
                result: app::load_catalog(&client).await,
            },
            FetchRequest::Page { id, generation } => FetchOutcome::Page {
                generation,
                result: app::load_page(&client, &id).await,
            },
        };
        let _ = tx.send(outcome);
    });
}

/// Main event loop - handles input, spawns fetches, applies outcomes, renders
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    client: CatalogClient,
    player_kind: PlayerKind,
) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let (tx, mut rx) = mpsc::unbounded_channel();

    while app.running {
        // Spawn any fetch sequences queued by navigation
        for request in app.take_requests() {
            spawn_fetch(request, client.clone(), tx.clone());
        }

        // Hand a queued playback request to the local player
        if let Some(url) = app.take_player_request() {
            match LocalPlayer::new(player_kind).open(&url) {
                Ok(_) => app.notice = Some(format!("Opened in {}", player_kind)),
                Err(e) => app.notice = Some(e.to_string()),
            }
        }

        // Render current state
        terminal.draw(|frame| render_ui(frame, app))?;

        // Poll for events with timeout so completed fetches keep draining
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Apply completed fetches; stale generations are dropped inside
        while let Ok(outcome) = rx.try_recv() {
            app.apply(outcome);
        }
    }

    Ok(())
}

// =============================================================================
// UI Rendering
// =============================================================================

/// Main render function - dispatches to screen-specific renderers
fn render_ui(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::BACKGROUND)),
        area,
    );

    // Main layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_content(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    // Render notice overlay if present
    if let Some(ref notice) = app.notice {
        render_notice_popup(frame, area, notice);
    }
}

/// Render the header with the logo
fn render_header(frame: &mut Frame, area: Rect) {
    let logo = Paragraph::new(Line::from(vec![
        Span::styled(
            "TUBE",
            Style::default()
                .fg(Theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "TUI",
            Style::default()
                .fg(Theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, area);
}

/// Render the main content area based on current screen
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Home => ui::home::render(frame, area, app),
        Screen::Detail => ui::detail::render(frame, area, app),
    }
}

/// Render status bar at bottom
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::ACCENT),
        ),
    };

    let help = match app.screen {
        Screen::Home => " q:quit  ↑↓:move  ↵:open  r:refresh ",
        Screen::Detail => " ESC:back  ↵:up next  p:play  c:comment  l:like  f:follow ",
    };

    let status_line = Line::from(vec![
        mode_indicator,
        Span::raw(" "),
        Span::styled(help, Theme::dimmed()),
    ]);

    let status = Paragraph::new(status_line).style(Theme::status_bar());
    frame.render_widget(status, area);
}

/// Render notice popup overlay
fn render_notice_popup(frame: &mut Frame, area: Rect, notice: &str) {
    let popup_width = 60.min(area.width.saturating_sub(4));
    let popup_height = 5;

    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(notice, Theme::accent())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Theme::border_focused())
            .title(Span::styled(" NOTICE ", Theme::title()))
            .style(Style::default().bg(Theme::BACKGROUND)),
    );

    frame.render_widget(popup, popup_area);
}
