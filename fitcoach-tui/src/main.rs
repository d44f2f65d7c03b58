//! FitCoach TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fitcoach_core::wire::ChatRequest;
use fitcoach_tui::api_client::ChatClient;
use fitcoach_tui::config::TuiConfig;
use fitcoach_tui::error::TuiError;
use fitcoach_tui::events::{RequestKind, TuiEvent};
use fitcoach_tui::keys::{map_key, Action};
use fitcoach_tui::state::App;
use fitcoach_tui::views::render_view;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    fitcoach_tui::logging::init(&config.log_path)?;
    let client = ChatClient::new(&config)?;
    tracing::info!(chat_url = client.chat_url(), "Starting FitCoach TUI");
    let mut app = App::new(config);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);

    spawn_input_reader(event_tx.clone());
    spawn_request(
        client.clone(),
        RequestKind::Boot,
        app.session.boot_request(),
        event_tx.clone(),
    );

    let tick_rate = Duration::from_millis(app.config.tick_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {}
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, &client, &event_tx, event) {
                    break;
                }
            }
        }
    }

    tracing::info!(
        messages = app.session.messages().len(),
        events = app.session.events().len(),
        "FitCoach TUI exiting"
    );
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let forwarded = match evt {
                    CrosstermEvent::Key(key) => Some(TuiEvent::Input(key)),
                    CrosstermEvent::Resize(width, height) => {
                        Some(TuiEvent::Resize { width, height })
                    }
                    _ => None,
                };
                if let Some(evt) = forwarded {
                    if sender.blocking_send(evt).is_err() {
                        break;
                    }
                }
            }
        }
    });
}

/// Run one `/chat` call off the event loop and report back as a `Reply`.
fn spawn_request(
    client: ChatClient,
    kind: RequestKind,
    request: ChatRequest,
    sender: mpsc::Sender<TuiEvent>,
) {
    tokio::spawn(async move {
        let response = client.send(&request).await.map(Box::new);
        let _ = sender.send(TuiEvent::Reply { kind, response }).await;
    });
}

/// Returns `true` when the app should quit.
fn handle_event(
    app: &mut App,
    client: &ChatClient,
    sender: &mpsc::Sender<TuiEvent>,
    event: TuiEvent,
) -> bool {
    match event {
        TuiEvent::Input(key) => {
            if let Some(action) = map_key(key, app.input_mode()) {
                return handle_action(app, client, sender, action);
            }
        }
        TuiEvent::Reply { kind, response } => {
            app.apply_reply(kind, response.map(|r| *r));
        }
        TuiEvent::Resize { width, height } => {
            tracing::debug!(width, height, "Terminal resized");
        }
    }
    false
}

fn handle_action(
    app: &mut App,
    client: &ChatClient,
    sender: &mpsc::Sender<TuiEvent>,
    action: Action,
) -> bool {
    let request = match action {
        Action::Quit => return true,
        Action::Submit => app.submit_input(),
        Action::Select => app.choose_workout(),
        Action::NextPanel => {
            app.next_panel();
            None
        }
        Action::PrevPanel => {
            app.prev_panel();
            None
        }
        Action::ScrollUp => {
            app.scroll_up();
            None
        }
        Action::ScrollDown => {
            app.scroll_down();
            None
        }
        Action::OpenWorkouts => {
            app.open_workout_picker();
            None
        }
        Action::Cancel => {
            app.close_workout_picker();
            None
        }
        Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {
            if let Some(picker) = app.workout_picker.as_mut() {
                match action {
                    Action::MoveUp => picker.move_up(),
                    Action::MoveDown => picker.move_down(),
                    Action::MoveLeft => picker.move_left(),
                    _ => picker.move_right(),
                }
            }
            None
        }
        Action::Edit(key) => {
            app.edit_input(key);
            None
        }
    };

    if let Some(request) = request {
        spawn_request(client.clone(), RequestKind::Submit, request, sender.clone());
    }
    false
}
