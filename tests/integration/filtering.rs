// Registry filtering and ordering

use crate::common::helpers::make_prompt;
use promptdash::ui::state::{AppState, matches_query};

fn seeded_state() -> AppState {
    let mut state = AppState::default();
    state.prompts = vec![
        make_prompt("a1", "Review my Rust code for soundness", None, 30),
        make_prompt("b2", "Write a SQL migration plan", Some("optimized SQL plan"), 10),
        make_prompt("c3", "Summarize the design doc", Some("optimized summary"), 20),
    ];
    state
}

#[test]
fn sorted_prompts_newest_first() {
    let state = seeded_state();
    let ids: Vec<&str> = state.sorted_prompts().iter().map(|p| p.id.as_str()).collect();
    // b2 (10 min old) < c3 (20) < a1 (30)
    assert_eq!(ids, vec!["b2", "c3", "a1"]);
}

#[test]
fn empty_query_matches_everything() {
    let state = seeded_state();
    assert_eq!(state.filtered_prompts().len(), 3);
}

#[test]
fn query_is_case_insensitive() {
    let record = make_prompt("a1", "Review my Rust code", None, 0);
    assert!(matches_query(&record, "rust"));
    assert!(matches_query(&record, "RUST"));
    assert!(matches_query(&record, "Review"));
}

#[test]
fn query_matches_title_or_content() {
    // Title is truncated at 40 chars, so the tail only exists in raw content
    let long = format!("{} tail-marker", "x".repeat(60));
    let record = make_prompt("a1", &long, None, 0);
    assert!(!record.title.contains("tail-marker"));
    assert!(matches_query(&record, "tail-marker"));
}

#[test]
fn query_with_no_matches_yields_empty_list() {
    let mut state = seeded_state();
    state.search_query = "nonexistent".to_string();
    assert!(state.filtered_prompts().is_empty());
}

#[test]
fn registry_rows_list_drafts_before_saved() {
    let state = seeded_state();
    let rows = state.registry_rows();
    // a1 is the only draft; saved records follow newest first
    let ids: Vec<&str> = rows.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "b2", "c3"]);
}

#[test]
fn registry_rows_respect_the_filter() {
    let mut state = seeded_state();
    state.search_query = "sql".to_string();
    let ids: Vec<&str> = state
        .registry_rows()
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["b2"]);
}

#[test]
fn draft_and_saved_partition_by_optimized_content() {
    let state = seeded_state();
    assert_eq!(state.drafts().len(), 1);
    assert_eq!(state.saved().len(), 2);
    assert!(state.drafts()[0].is_draft());
}
