// View-state behavior: deletes, optimize gating, analysis window

use crate::common::helpers::make_prompt;
use promptdash::api::types::OptimizeResponse;
use promptdash::ui::state::{AppState, PromptTabState};

#[test]
fn local_delete_removes_exactly_the_target() {
    let mut state = AppState::default();
    state.prompts = vec![
        make_prompt("a1", "first", None, 1),
        make_prompt("b2", "second", None, 2),
        make_prompt("c3", "third", None, 3),
    ];

    state.delete_prompt_local("b2");

    let ids: Vec<&str> = state.prompts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "c3"]);
}

#[test]
fn local_delete_of_unknown_id_is_a_no_op() {
    let mut state = AppState::default();
    state.prompts = vec![make_prompt("a1", "first", None, 1)];
    state.delete_prompt_local("zz");
    assert_eq!(state.prompts.len(), 1);
}

#[test]
fn optimize_logs_feedback_and_enables_registry_save() {
    let mut prompt = PromptTabState::default();
    prompt.set_draft_text("make this better");

    prompt.apply_optimize(
        "make this better".to_string(),
        OptimizeResponse {
            final_prompt: "a much better prompt".to_string(),
            advice: Some("use a role".to_string()),
        },
    );

    assert_eq!(prompt.optimized.as_deref(), Some("a much better prompt"));
    assert_eq!(prompt.advice.as_deref(), Some("use a role"));
    assert_eq!(prompt.feedback_history.len(), 1);
    assert_eq!(prompt.feedback_history[0].text, "use a role");
    assert!(prompt.can_save_to_registry());
}

#[test]
fn editing_the_draft_revokes_registry_save() {
    let mut prompt = PromptTabState::default();
    prompt.set_draft_text("make this better");
    prompt.apply_optimize(
        "make this better".to_string(),
        OptimizeResponse {
            final_prompt: "a much better prompt".to_string(),
            advice: None,
        },
    );
    assert!(prompt.can_save_to_registry());

    prompt.set_draft_text("make this better please");
    assert!(!prompt.can_save_to_registry());

    // Restoring the exact optimized input re-enables the save
    prompt.set_draft_text("make this better");
    assert!(prompt.can_save_to_registry());
}

#[test]
fn newest_feedback_entry_is_listed_first() {
    let mut prompt = PromptTabState::default();
    for advice in ["first", "second"] {
        prompt.apply_optimize(
            "input".to_string(),
            OptimizeResponse {
                final_prompt: "out".to_string(),
                advice: Some(advice.to_string()),
            },
        );
    }
    assert_eq!(prompt.feedback_history[0].text, "second");
    assert_eq!(prompt.feedback_history[1].text, "first");
}

#[test]
fn analysis_window_takes_most_recent_prompts() {
    let mut state = AppState::default();
    state.analysis_window = 3;
    for i in 0..5i64 {
        state
            .prompts
            .push(make_prompt(&format!("p{}", i), &format!("content {}", i), None, i));
    }

    let window = state.analysis_window_contents();
    // Smallest age first per the newest-first ordering
    assert_eq!(window, vec!["content 0", "content 1", "content 2"]);
}

#[test]
fn analysis_window_handles_fewer_prompts_than_the_limit() {
    let mut state = AppState::default();
    state.analysis_window = 10;
    state.prompts = vec![make_prompt("a1", "only one", None, 0)];
    assert_eq!(state.analysis_window_contents(), vec!["only one"]);
}
