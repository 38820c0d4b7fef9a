// Patterns screen event handling

use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::state::AppState;

use super::{RequestContext, requests};

pub(super) fn handle_patterns_key(key: KeyEvent, state: &mut AppState, ctx: &RequestContext) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => {
            start_analysis(state, ctx);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            move_log_selection(state, -1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_log_selection(state, 1);
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            if let Some(index) = state.patterns.list_state.selected() {
                state.patterns.delete_entry(index);
            }
        }
        _ => {}
    }
}

/// `A`: run the habit analysis over the most recent prompts
fn start_analysis(state: &mut AppState, ctx: &RequestContext) {
    if state.patterns.analyzing {
        return;
    }
    let window = state.analysis_window_contents();
    if window.is_empty() {
        return;
    }
    state.patterns.analyzing = true;
    requests::spawn_analyze(ctx, window);
}

fn move_log_selection(state: &mut AppState, delta: i64) {
    let count = state.patterns.history.len();
    if count == 0 {
        state.patterns.list_state.select(None);
        return;
    }
    let current = state.patterns.list_state.selected().unwrap_or(0) as i64;
    let next = (current + delta).clamp(0, count as i64 - 1) as usize;
    state.patterns.list_state.select(Some(next));
}
