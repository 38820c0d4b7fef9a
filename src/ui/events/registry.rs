// Registry screen event handling

use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::state::{AppState, Screen};

use super::{RequestContext, requests};

pub(super) fn handle_registry_key(key: KeyEvent, state: &mut AppState, ctx: &RequestContext) {
    if state.search_editing {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                state.search_editing = false;
            }
            KeyCode::Backspace => {
                state.search_query.pop();
                let rows = state.registry_rows().len();
                state.registry.clamp_selection(rows);
            }
            KeyCode::Char(c) => {
                state.search_query.push(c);
                let rows = state.registry_rows().len();
                state.registry.clamp_selection(rows);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('/') => {
            state.search_editing = true;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            move_selection(state, -1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_selection(state, 1);
        }
        KeyCode::Enter => {
            open_selected(state);
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            delete_selected(state, ctx);
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if !state.fetch_in_progress {
                state.fetch_in_progress = true;
                requests::spawn_fetch(ctx);
            }
        }
        _ => {}
    }
}

fn move_selection(state: &mut AppState, delta: i64) {
    let count = state.registry_rows().len();
    if count == 0 {
        state.registry.list_state.select(None);
        return;
    }
    let current = state.registry.list_state.selected().unwrap_or(0) as i64;
    let next = (current + delta).clamp(0, count as i64 - 1) as usize;
    state.registry.list_state.select(Some(next));
}

/// Enter: bring the selected record into the prompt editor. Drafts stay
/// linked so a draft save updates them; saved records are loaded as a
/// fresh working copy.
fn open_selected(state: &mut AppState) {
    let Some(index) = state.registry.list_state.selected() else {
        return;
    };
    let Some(record) = state.registry_rows().get(index).map(|r| (*r).clone()) else {
        return;
    };

    if record.is_draft() {
        state.prompt.begin_edit_record(&record);
    } else {
        state.prompt.load_content(&record.raw_content);
        state.prompt.active_draft_id = None;
    }
    state.current_screen = Screen::Prompt;
}

fn delete_selected(state: &mut AppState, ctx: &RequestContext) {
    if state.delete_in_progress {
        return;
    }
    let Some(index) = state.registry.list_state.selected() else {
        return;
    };
    let Some(id) = state.registry_rows().get(index).map(|r| r.id.clone()) else {
        return;
    };

    // If the deleted record is being edited, detach the editor from it
    if state.prompt.active_draft_id.as_deref() == Some(id.as_str()) {
        state.prompt.active_draft_id = None;
    }

    state.delete_in_progress = true;
    requests::spawn_delete(ctx, id);
}
