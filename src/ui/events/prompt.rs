// Prompt screen event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{Input, Key};

use crate::api::SaveRequest;
use crate::ui::state::{AppState, InputMode};

use super::{RequestContext, SaveKind, requests};

pub(super) fn handle_prompt_key(key: KeyEvent, state: &mut AppState, ctx: &RequestContext) {
    if state.prompt.input_mode == InputMode::Editing {
        match key.code {
            KeyCode::Esc => {
                state.prompt.input_mode = InputMode::Normal;
            }
            _ => {
                // Everything else belongs to the editor
                state.prompt.draft.input(editor_input(key));
            }
        }
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Char('i') => {
            state.prompt.input_mode = InputMode::Editing;
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            start_optimize(state, ctx);
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            save_to_registry(state, ctx);
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            save_draft(state, ctx);
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            if state.prompt.active_draft_id.is_some() {
                state.prompt.cancel_draft();
            }
        }
        KeyCode::Up => {
            move_sidebar_selection(state, -1);
        }
        KeyCode::Down => {
            move_sidebar_selection(state, 1);
        }
        KeyCode::Char(' ') => {
            load_sidebar_selection(state);
        }
        _ => {}
    }
}

/// Map a terminal key event onto the editor's own input type
fn editor_input(key: KeyEvent) -> Input {
    let code = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab => Key::Tab,
        KeyCode::Delete => Key::Delete,
        KeyCode::F(n) => Key::F(n),
        _ => Key::Null,
    };
    Input {
        key: code,
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
    }
}

fn start_optimize(state: &mut AppState, ctx: &RequestContext) {
    if state.prompt.optimizing {
        return;
    }
    let text = state.prompt.draft_text();
    if text.trim().is_empty() {
        return;
    }
    state.prompt.optimizing = true;
    state.prompt.advice = None;
    requests::spawn_optimize(ctx, text);
}

/// `S`: persist the optimized output as a new registry record. Only valid
/// while the draft still matches the text the optimization ran against.
fn save_to_registry(state: &mut AppState, ctx: &RequestContext) {
    if state.prompt.saving || !state.prompt.can_save_to_registry() {
        return;
    }
    let text = state.prompt.draft_text();
    let optimized = state.prompt.optimized.clone();
    if let Some(request) = SaveRequest::plan(None, &text, optimized) {
        state.prompt.saving = true;
        requests::spawn_save(ctx, request, SaveKind::Registry);
    }
}

/// `D`: persist the raw draft, updating the active draft record when
/// one is being edited and creating a new one otherwise.
fn save_draft(state: &mut AppState, ctx: &RequestContext) {
    if state.prompt.saving {
        return;
    }
    let text = state.prompt.draft_text();
    let active = state.prompt.active_draft_id.clone();
    if let Some(request) = SaveRequest::plan(active.as_deref(), &text, None) {
        let kind = match request {
            SaveRequest::Update { .. } => SaveKind::DraftUpdate,
            SaveRequest::Create(_) => SaveKind::Draft,
        };
        state.prompt.saving = true;
        requests::spawn_save(ctx, request, kind);
    }
}

fn move_sidebar_selection(state: &mut AppState, delta: i64) {
    let count = state
        .filtered_prompts()
        .len()
        .min(state.sidebar_limit);
    if count == 0 {
        state.prompt.sidebar_state.select(None);
        return;
    }
    let current = state.prompt.sidebar_state.selected().unwrap_or(0) as i64;
    let next = (current + delta).clamp(0, count as i64 - 1) as usize;
    state.prompt.sidebar_state.select(Some(next));
}

/// Space: copy the highlighted sidebar prompt's raw content into the
/// editor. Unlike editing from the registry screen, this never changes
/// which draft is active.
fn load_sidebar_selection(state: &mut AppState) {
    let Some(index) = state.prompt.sidebar_state.selected() else {
        return;
    };
    let selected = state
        .filtered_prompts()
        .into_iter()
        .take(state.sidebar_limit)
        .nth(index)
        .cloned();
    if let Some(record) = selected {
        state.prompt.load_content(&record.raw_content);
    }
}
