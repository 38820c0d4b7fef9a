// Wire format compatibility with the prompt API

use promptdash::api::{NewPrompt, OptimizeResponse, PromptRecord};

#[test]
fn record_deserializes_from_api_shape() {
    let json = r#"{
        "_id": "66f1a2b3c4d5e6f7a8b9c0d1",
        "title": "Review my code",
        "raw_content": "Review my code for soundness",
        "optimized_content": "You are a senior reviewer...",
        "createdAt": "2026-02-15T09:30:00Z"
    }"#;

    let record: PromptRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, "66f1a2b3c4d5e6f7a8b9c0d1");
    assert_eq!(record.title, "Review my code");
    assert!(!record.is_draft());
}

#[test]
fn record_without_optimized_content_is_a_draft() {
    let json = r#"{
        "_id": "66f1a2b3c4d5e6f7a8b9c0d2",
        "title": "draft",
        "raw_content": "draft",
        "createdAt": "2026-02-15T09:30:00Z"
    }"#;

    let record: PromptRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.optimized_content, None);
    assert!(record.is_draft());
}

#[test]
fn new_prompt_omits_missing_optimized_content() {
    let draft = NewPrompt {
        title: "t".to_string(),
        raw_content: "c".to_string(),
        optimized_content: None,
    };
    let json = serde_json::to_value(&draft).unwrap();
    assert!(json.get("optimized_content").is_none());

    let saved = NewPrompt {
        optimized_content: Some("o".to_string()),
        ..draft
    };
    let json = serde_json::to_value(&saved).unwrap();
    assert_eq!(json["optimized_content"], "o");
}

#[test]
fn optimize_response_advice_is_optional() {
    let with: OptimizeResponse =
        serde_json::from_str(r#"{"final_prompt": "better", "advice": "tip"}"#).unwrap();
    assert_eq!(with.advice.as_deref(), Some("tip"));

    let without: OptimizeResponse = serde_json::from_str(r#"{"final_prompt": "better"}"#).unwrap();
    assert_eq!(without.final_prompt, "better");
    assert_eq!(without.advice, None);
}
