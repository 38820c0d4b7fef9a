// Save planning: create vs update, and title derivation

use promptdash::api::{SaveRequest, derive_title};

#[test]
fn blank_draft_produces_no_save() {
    assert_eq!(SaveRequest::plan(None, "", None), None);
    assert_eq!(SaveRequest::plan(None, "   \n\t  ", None), None);
    assert_eq!(SaveRequest::plan(Some("id-1"), "  ", None), None);
}

#[test]
fn raw_draft_without_active_record_creates() {
    let request = SaveRequest::plan(None, "my new draft", None).unwrap();
    match request {
        SaveRequest::Create(prompt) => {
            assert_eq!(prompt.title, "my new draft");
            assert_eq!(prompt.raw_content, "my new draft");
            assert_eq!(prompt.optimized_content, None);
        }
        other => panic!("expected Create, got {:?}", other),
    }
}

#[test]
fn raw_draft_with_active_record_updates_in_place() {
    let request = SaveRequest::plan(Some("draft-7"), "edited content", None).unwrap();
    match request {
        SaveRequest::Update { id, update } => {
            assert_eq!(id, "draft-7");
            assert_eq!(update.title, "edited content");
            assert_eq!(update.raw_content, "edited content");
        }
        other => panic!("expected Update, got {:?}", other),
    }
}

#[test]
fn optimized_save_always_creates_a_new_record() {
    // Even while editing a draft, saving the optimized output creates a
    // fresh registry record rather than converting the draft
    let request =
        SaveRequest::plan(Some("draft-7"), "original text", Some("rewritten".to_string()))
            .unwrap();
    match request {
        SaveRequest::Create(prompt) => {
            assert_eq!(prompt.raw_content, "original text");
            assert_eq!(prompt.optimized_content.as_deref(), Some("rewritten"));
        }
        other => panic!("expected Create, got {:?}", other),
    }
}

#[test]
fn planned_title_is_derived_from_content() {
    let content = format!("{}\nmore detail", "a".repeat(50));
    let request = SaveRequest::plan(None, &content, None).unwrap();
    match request {
        SaveRequest::Create(prompt) => {
            assert_eq!(prompt.title, derive_title(&content));
            assert!(prompt.title.ends_with("..."));
        }
        other => panic!("expected Create, got {:?}", other),
    }
}
