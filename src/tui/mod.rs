//! Terminal UI for the game client.
//!
//! The presentation layer owns the session and forwards user intents
//! into it; all remote traffic happens off the UI loop (synchronizer
//! worker, excuse fetch tasks).

mod app;
mod input;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, info};

use app::{App, UiMessage};

use crate::auth::AuthSession;
use crate::config::Config;
use crate::excuses::Language;
use crate::remote::BackendClient;
use crate::session::GameSession;
use crate::sync::Synchronizer;

/// Runs the TUI client until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be configured.
pub async fn run_tui(config: Config, user: Option<AuthSession>) -> Result<()> {
    // Log to a file to avoid interfering with the TUI.
    let log_file = std::fs::File::create("excuseme_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Excuse Me TUI");

    let client = BackendClient::new(&config);
    let sync = Synchronizer::spawn(client.clone());
    let mut session = GameSession::new(sync);
    // A fresh remote game is requested as soon as the client starts.
    session.start();

    let user_email = user.and_then(|s| s.user.email);
    let app = App::new(session, user_email);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, app, client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Event loop: drain background messages, draw, then poll for input.
async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    client: BackendClient,
) -> Result<()> {
    let (ui_tx, mut ui_rx) = mpsc::unbounded_channel::<UiMessage>();

    loop {
        while let Ok(message) = ui_rx.try_recv() {
            app.handle_message(message);
        }
        app.tick();

        terminal.draw(|f| ui::draw(f, &app))?;

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
            KeyCode::Char('n') | KeyCode::Char('N') => app.new_game(),
            KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
            KeyCode::Char('e') | KeyCode::Char('E') => {
                fetch_excuse(&mut app, &client, &ui_tx, Language::En);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                fetch_excuse(&mut app, &client, &ui_tx, Language::Es);
            }
            KeyCode::Enter | KeyCode::Char(' ') => app.place_at_cursor(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10)
                    && (1..=9).contains(&digit)
                {
                    app.place(digit as usize - 1);
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                app.move_cursor(key.code);
            }
            _ => {}
        }
    }
}

/// Spawns a background excuse fetch unless one is already in flight.
fn fetch_excuse(
    app: &mut App,
    client: &BackendClient,
    ui_tx: &mpsc::UnboundedSender<UiMessage>,
    language: Language,
) {
    if !app.begin_excuse() {
        debug!("Excuse fetch already in flight");
        return;
    }
    let client = client.clone();
    let tx = ui_tx.clone();
    tokio::spawn(async move {
        let result = client.fetch_excuse(language).await;
        let _ = tx.send(UiMessage::ExcuseFetched { language, result });
    });
}
