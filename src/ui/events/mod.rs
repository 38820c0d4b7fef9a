// Event handling and main UI loop

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Tabs},
};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::api::types::{AnalyzeResponse, OptimizeResponse, PromptRecord};
use crate::api::ApiClient;
use crate::ui::{
    HelpModal, PatternsScreen, PromptScreen, QuitModal, RegistryScreen,
    constants::{TAB_TITLES, TOAST_DURATION},
    state::{AppState, Screen, StatusKind},
};

mod help;
mod patterns;
mod prompt;
mod registry;
mod requests;

/// Which save action a request belongs to; decides the toast text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Draft,
    DraftUpdate,
    Registry,
}

/// Result of a background API request, delivered over the UI channel.
/// Failures are already logged by the request thread; the messages only
/// carry what the fold into state needs.
pub enum ApiMessage {
    PromptsLoaded(Vec<PromptRecord>),
    PromptsLoadFailed,
    OptimizeDone {
        input: String,
        response: OptimizeResponse,
    },
    OptimizeFailed,
    AnalyzeDone(AnalyzeResponse),
    AnalyzeFailed,
    SaveDone { kind: SaveKind },
    SaveFailed,
    DeleteDone { id: String },
    DeleteFailed,
}

// Event types sent from dedicated event thread to main loop
pub enum UiEvent {
    Input(Event),    // Keyboard, mouse, or other terminal events
    Tick,            // Periodic update for toast expiry and redraws
    Api(ApiMessage), // Result of a background request
}

/// Everything a key handler needs to dispatch a background request
pub struct RequestContext {
    pub client: Arc<ApiClient>,
    pub tx: Sender<UiEvent>,
}

/// Spawn a dedicated thread for event polling.
fn spawn_event_thread(tx: Sender<UiEvent>) {
    // Nothing animates; the tick only expires toasts and keeps the
    // loading indicators fresh
    let tick_rate = Duration::from_millis(250);

    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break; // Main thread dropped the receiver
                }
                last_tick = Instant::now();
            }
        }
    });
}

pub fn run_ui() -> anyhow::Result<()> {
    run_ui_with_options(None, None, &crate::config::Config::default())
}

pub fn run_ui_with_options(
    api_url: Option<String>,
    fetch_on_launch: Option<bool>,
    config: &crate::config::Config,
) -> anyhow::Result<()> {
    let base_url = api_url.unwrap_or_else(|| config.api.base_url.clone());
    let client = Arc::new(ApiClient::new(
        &base_url,
        Duration::from_secs(config.api.timeout_secs),
    )?);

    // Setup terminal with alternate screen (full terminal)
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::default();
    app_state.api_base_url = base_url;
    app_state.analysis_window = config.defaults.analysis_window;
    app_state.sidebar_limit = config.defaults.sidebar_limit;

    // Wire up UI event channel (shared with background request threads)
    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx.clone());

    let ctx = RequestContext {
        client,
        tx: event_tx,
    };

    // CLI flag > config > default
    let should_fetch = fetch_on_launch.unwrap_or(config.startup.fetch_on_launch);
    if should_fetch {
        app_state.fetch_in_progress = true;
        requests::spawn_fetch(&ctx);
    }

    // Main loop
    let result = run_app(&mut terminal, &mut app_state, event_rx, &ctx);

    // Restore terminal: leave alternate screen and disable mouse capture
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    event_rx: Receiver<UiEvent>,
    ctx: &RequestContext,
) -> anyhow::Result<()> {
    loop {
        // Collect pending events so tick bursts coalesce and inputs stay snappy
        let mut pending_ticks: u64 = 0;
        let mut pending_inputs: Vec<Event> = Vec::new();
        let mut pending_api: Vec<ApiMessage> = Vec::new();

        // Always block for at least one event, then drain the queue
        match event_rx.recv() {
            Ok(evt) => match evt {
                UiEvent::Tick => pending_ticks += 1,
                UiEvent::Input(ev) => pending_inputs.push(ev),
                UiEvent::Api(msg) => pending_api.push(msg),
            },
            Err(_) => {
                // Channel closed, exit
                return Ok(());
            }
        }

        while let Ok(evt) = event_rx.try_recv() {
            match evt {
                UiEvent::Tick => pending_ticks += 1,
                UiEvent::Input(ev) => pending_inputs.push(ev),
                UiEvent::Api(msg) => pending_api.push(msg),
            }
        }

        for msg in pending_api {
            requests::handle_api_message(msg, state, ctx);
        }

        // Process input events first so user commands are never stuck behind a tick backlog
        for input in pending_inputs {
            if let Event::Key(key) = input {
                if handle_key(key, state, ctx) {
                    return Ok(());
                }
            }
            // Mouse and resize events - nothing to do beyond the redraw
        }

        if pending_ticks > 0 {
            state.expire_status(TOAST_DURATION);
        }

        // Render after processing events
        terminal.draw(|frame| {
            match state.current_screen {
                Screen::Prompt => PromptScreen::render(frame, state),
                Screen::Patterns => PatternsScreen::render(frame, state),
                Screen::Registry => RegistryScreen::render(frame, state),
            }

            render_toast(frame, state);

            // Render modals on top if active
            if let Some(ref mut help_state) = state.help_modal {
                HelpModal::render(frame, help_state);
            }
            if let Some(ref quit_state) = state.quit_confirmation {
                QuitModal::render(frame, quit_state);
            }
        })?;
    }
}

/// Tab bar shared by every screen
pub fn render_tab_bar(frame: &mut ratatui::Frame, area: Rect, current: Screen) {
    let tabs = Tabs::new(TAB_TITLES.iter().map(|t| Line::from(*t)))
        .select(current.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(" | ");

    frame.render_widget(tabs, area);
}

/// One-line toast just above the footer
fn render_toast(frame: &mut ratatui::Frame, state: &AppState) {
    let Some(ref msg) = state.status_message else {
        return;
    };

    let area = frame.area();
    if area.height < 3 {
        return;
    }

    let toast_area = Rect {
        x: area.x,
        y: area.y + area.height - 2,
        width: area.width,
        height: 1,
    };

    let bg = match msg.kind {
        StatusKind::Success => Color::Green,
        StatusKind::Error => Color::Red,
    };

    frame.render_widget(
        Paragraph::new(msg.text.clone()).style(Style::default().bg(bg).fg(Color::Black)),
        toast_area,
    );
}

fn should_quit(key: &KeyEvent) -> bool {
    // Quit on 'q' or Ctrl+C
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn handle_key(key: KeyEvent, state: &mut AppState, ctx: &RequestContext) -> bool {
    // Quit confirmation modal captures all input while open
    if state.quit_confirmation.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                state.quit_confirmation = None;
            }
            _ => {}
        }
        return false;
    }

    // Help modal next
    if state.help_modal.is_some() {
        help::handle_help_key(key, state);
        return false;
    }

    // Check input mode - while editing text, global shortcuts are inactive
    let is_editing = match state.current_screen {
        Screen::Prompt => state.prompt.input_mode == crate::ui::state::InputMode::Editing,
        Screen::Registry => state.search_editing,
        Screen::Patterns => false,
    };

    if !is_editing {
        if should_quit(&key) {
            if state.in_flight_count() > 0 {
                state.quit_confirmation = Some(crate::ui::state::QuitConfirmationState {
                    in_flight_count: state.in_flight_count(),
                });
                return false;
            }
            return true;
        }

        // 'H' opens help from any screen
        if matches!(key.code, KeyCode::Char('h') | KeyCode::Char('H')) {
            help::open_help(state);
            return false;
        }

        // Screen switching
        match key.code {
            KeyCode::Char('1') => {
                state.current_screen = Screen::Prompt;
                return false;
            }
            KeyCode::Char('2') => {
                state.current_screen = Screen::Patterns;
                return false;
            }
            KeyCode::Char('3') => {
                state.current_screen = Screen::Registry;
                return false;
            }
            KeyCode::Tab => {
                state.current_screen = match state.current_screen {
                    Screen::Prompt => Screen::Patterns,
                    Screen::Patterns => Screen::Registry,
                    Screen::Registry => Screen::Prompt,
                };
                return false;
            }
            _ => {}
        }
    }

    // Handle screen-specific keys
    match state.current_screen {
        Screen::Prompt => prompt::handle_prompt_key(key, state, ctx),
        Screen::Patterns => patterns::handle_patterns_key(key, state, ctx),
        Screen::Registry => registry::handle_registry_key(key, state, ctx),
    }

    false
}
