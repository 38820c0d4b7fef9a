/// Property-based tests for the registry filter
///
/// Uses proptest to generate arbitrary prompt sets and queries and verify
/// the filter's invariants hold regardless of input.

use chrono::{Duration, TimeZone, Utc};
use promptdash::api::{PromptRecord, derive_title};
use promptdash::ui::state::{AppState, matches_query};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = PromptRecord> {
    (
        "[a-f0-9]{8}",
        "[a-zA-Z0-9 .,!?]{0,120}",
        prop::option::of("[a-zA-Z0-9 ]{0,40}"),
        0i64..10_000,
    )
        .prop_map(|(id, content, optimized, age_minutes)| {
            let base = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
            PromptRecord {
                id,
                title: derive_title(&content),
                raw_content: content,
                optimized_content: optimized,
                created_at: base - Duration::minutes(age_minutes),
            }
        })
}

proptest! {
    #[test]
    fn filtered_is_a_subset_of_all(
        records in prop::collection::vec(arb_record(), 0..20),
        query in "[a-zA-Z0-9 ]{0,10}",
    ) {
        let mut state = AppState::default();
        state.prompts = records;
        state.search_query = query;

        let filtered = state.filtered_prompts();
        prop_assert!(filtered.len() <= state.prompts.len());
        for record in &filtered {
            prop_assert!(state.prompts.iter().any(|p| p.id == record.id));
        }
    }

    #[test]
    fn every_filtered_record_matches_the_query(
        records in prop::collection::vec(arb_record(), 0..20),
        query in "[a-zA-Z0-9 ]{0,10}",
    ) {
        let mut state = AppState::default();
        state.prompts = records;
        state.search_query = query.clone();

        for record in state.filtered_prompts() {
            prop_assert!(matches_query(record, &query));
        }
    }

    #[test]
    fn empty_query_keeps_everything(
        records in prop::collection::vec(arb_record(), 0..20),
    ) {
        let mut state = AppState::default();
        state.prompts = records;
        state.search_query = String::new();

        prop_assert_eq!(state.filtered_prompts().len(), state.prompts.len());
    }

    #[test]
    fn filtered_order_stays_newest_first(
        records in prop::collection::vec(arb_record(), 0..20),
        query in "[a-zA-Z0-9 ]{0,4}",
    ) {
        let mut state = AppState::default();
        state.prompts = records;
        state.search_query = query;

        let filtered = state.filtered_prompts();
        for pair in filtered.windows(2) {
            prop_assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
