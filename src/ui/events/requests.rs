// Background API requests and their result handling.
//
// Each user action spawns at most one short-lived request thread; the
// matching loading flag in AppState stays set until the result comes
// back over the UI channel. Failures are logged and, except for saves,
// silently discarded so the UI never blocks on a flaky server.

use std::thread;

use crate::api::SaveRequest;
use crate::ui::constants::{
    TOAST_DRAFT_SAVED, TOAST_DRAFT_UPDATED, TOAST_REGISTRY_SAVED, TOAST_SAVE_FAILED,
};
use crate::ui::state::{AppState, StatusKind};

use super::{ApiMessage, RequestContext, SaveKind, UiEvent};

pub(super) fn spawn_fetch(ctx: &RequestContext) {
    let client = ctx.client.clone();
    let tx = ctx.tx.clone();
    thread::spawn(move || {
        let msg = match client.fetch_all() {
            Ok(records) => ApiMessage::PromptsLoaded(records),
            Err(e) => {
                tracing::warn!(error = %e, "fetching prompts failed");
                ApiMessage::PromptsLoadFailed
            }
        };
        let _ = tx.send(UiEvent::Api(msg));
    });
}

pub(super) fn spawn_optimize(ctx: &RequestContext, input: String) {
    let client = ctx.client.clone();
    let tx = ctx.tx.clone();
    thread::spawn(move || {
        let msg = match client.optimize(&input) {
            Ok(response) => ApiMessage::OptimizeDone { input, response },
            Err(e) => {
                tracing::warn!(error = %e, "optimize request failed");
                ApiMessage::OptimizeFailed
            }
        };
        let _ = tx.send(UiEvent::Api(msg));
    });
}

pub(super) fn spawn_analyze(ctx: &RequestContext, prompts: Vec<String>) {
    let client = ctx.client.clone();
    let tx = ctx.tx.clone();
    thread::spawn(move || {
        let msg = match client.analyze(prompts) {
            Ok(response) => ApiMessage::AnalyzeDone(response),
            Err(e) => {
                tracing::warn!(error = %e, "analyze request failed");
                ApiMessage::AnalyzeFailed
            }
        };
        let _ = tx.send(UiEvent::Api(msg));
    });
}

pub(super) fn spawn_save(ctx: &RequestContext, request: SaveRequest, kind: SaveKind) {
    let client = ctx.client.clone();
    let tx = ctx.tx.clone();
    thread::spawn(move || {
        let result = match &request {
            SaveRequest::Create(prompt) => client.create(prompt).map(|_| ()),
            SaveRequest::Update { id, update } => client.update(id, update).map(|_| ()),
        };
        let msg = match result {
            Ok(()) => ApiMessage::SaveDone { kind },
            Err(e) => {
                tracing::warn!(error = %e, ?kind, "save request failed");
                ApiMessage::SaveFailed
            }
        };
        let _ = tx.send(UiEvent::Api(msg));
    });
}

pub(super) fn spawn_delete(ctx: &RequestContext, id: String) {
    let client = ctx.client.clone();
    let tx = ctx.tx.clone();
    thread::spawn(move || {
        let msg = match client.delete(&id) {
            Ok(()) => ApiMessage::DeleteDone { id },
            Err(e) => {
                tracing::warn!(error = %e, id = %id, "delete request failed");
                ApiMessage::DeleteFailed
            }
        };
        let _ = tx.send(UiEvent::Api(msg));
    });
}

/// Fold a completed request back into the application state.
pub(super) fn handle_api_message(msg: ApiMessage, state: &mut AppState, ctx: &RequestContext) {
    match msg {
        ApiMessage::PromptsLoaded(records) => {
            state.fetch_in_progress = false;
            state.prompts = records;
            let rows = state.registry_rows().len();
            state.registry.clamp_selection(rows);
        }
        ApiMessage::PromptsLoadFailed => {
            // Treat an unreachable registry as empty rather than stale
            state.fetch_in_progress = false;
            state.prompts.clear();
            state.registry.clamp_selection(0);
        }
        ApiMessage::OptimizeDone { input, response } => {
            state.prompt.optimizing = false;
            state.prompt.apply_optimize(input, response);
        }
        ApiMessage::OptimizeFailed => {
            state.prompt.optimizing = false;
        }
        ApiMessage::AnalyzeDone(response) => {
            state.patterns.analyzing = false;
            state.patterns.apply_analysis(response);
        }
        ApiMessage::AnalyzeFailed => {
            state.patterns.analyzing = false;
        }
        ApiMessage::SaveDone { kind } => {
            state.prompt.saving = false;
            match kind {
                SaveKind::Draft => state.set_status(TOAST_DRAFT_SAVED, StatusKind::Success),
                SaveKind::DraftUpdate => {
                    state.set_status(TOAST_DRAFT_UPDATED, StatusKind::Success)
                }
                SaveKind::Registry => {
                    // The saved record is its own registry entry now; the
                    // editor no longer tracks a remote draft
                    state.prompt.active_draft_id = None;
                    state.set_status(TOAST_REGISTRY_SAVED, StatusKind::Success);
                }
            }
            refresh_prompts(state, ctx);
        }
        ApiMessage::SaveFailed => {
            state.prompt.saving = false;
            state.set_status(TOAST_SAVE_FAILED, StatusKind::Error);
        }
        ApiMessage::DeleteDone { id } => {
            state.delete_in_progress = false;
            state.delete_prompt_local(&id);
            refresh_prompts(state, ctx);
        }
        ApiMessage::DeleteFailed => {
            state.delete_in_progress = false;
        }
    }
}

/// Re-fetch the registry after a mutation, unless a fetch is already running
fn refresh_prompts(state: &mut AppState, ctx: &RequestContext) {
    if !state.fetch_in_progress {
        state.fetch_in_progress = true;
        spawn_fetch(ctx);
    }
}
