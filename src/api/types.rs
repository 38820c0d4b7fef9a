use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of characters of content kept when deriving a title
const TITLE_MAX_CHARS: usize = 40;

/// A prompt record as stored by the remote registry.
///
/// Records without optimized content are drafts; records with it belong to
/// the saved registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    pub raw_content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_content: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl PromptRecord {
    pub fn is_draft(&self) -> bool {
        self.optimized_content.is_none()
    }
}

/// Body for `POST /prompts`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPrompt {
    pub title: String,
    pub raw_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized_content: Option<String>,
}

/// Body for `PUT /prompts/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptUpdate {
    pub title: String,
    pub raw_content: String,
}

/// Body for `POST /ai/optimize`
#[derive(Debug, Clone, Serialize)]
pub struct OptimizeRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptimizeResponse {
    pub final_prompt: String,

    /// Strategic advice accompanying the rewrite; the backend may omit it
    #[serde(default)]
    pub advice: Option<String>,
}

/// Body for `POST /ai/analyze`
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub prompts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyzeResponse {
    pub feedback: String,
}

/// Client-local feedback or analysis log entry. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The remote write a save action resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create(NewPrompt),
    Update { id: String, update: PromptUpdate },
}

impl SaveRequest {
    /// Decide what a save action does.
    ///
    /// Plain draft saves update the active draft when there is one and
    /// create a record otherwise. Saves carrying optimized content always
    /// create a fresh registry record. Blank content saves nothing.
    pub fn plan(
        active_draft_id: Option<&str>,
        content: &str,
        optimized: Option<String>,
    ) -> Option<Self> {
        if content.trim().is_empty() {
            return None;
        }

        let title = derive_title(content);

        match (optimized, active_draft_id) {
            (None, Some(id)) => Some(Self::Update {
                id: id.to_string(),
                update: PromptUpdate {
                    title,
                    raw_content: content.to_string(),
                },
            }),
            (optimized, _) => Some(Self::Create(NewPrompt {
                title,
                raw_content: content.to_string(),
                optimized_content: optimized,
            })),
        }
    }
}

/// Derive a list title from prompt content: the first 40 characters with
/// newlines flattened, plus an ellipsis when truncated.
pub fn derive_title(content: &str) -> String {
    let mut title: String = content
        .chars()
        .take(TITLE_MAX_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    if content.chars().count() > TITLE_MAX_CHARS {
        title.push_str("...");
    }

    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_title_short_content() {
        assert_eq!(derive_title("review my code"), "review my code");
    }

    #[test]
    fn test_derive_title_truncates_at_40_chars() {
        let content = "a".repeat(50);
        let title = derive_title(&content);
        assert_eq!(title, format!("{}...", "a".repeat(40)));
    }

    #[test]
    fn test_derive_title_flattens_newlines() {
        assert_eq!(derive_title("line one\nline two"), "line one line two");
    }

    #[test]
    fn test_derive_title_is_char_based() {
        // 41 multibyte chars must not split a codepoint
        let content = "é".repeat(41);
        let title = derive_title(&content);
        assert_eq!(title, format!("{}...", "é".repeat(40)));
    }

    #[test]
    fn test_record_draft_partition() {
        let json = r#"{
            "_id": "abc123",
            "title": "t",
            "raw_content": "c",
            "createdAt": "2026-02-09T10:05:00Z"
        }"#;
        let record: PromptRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_draft());
        assert_eq!(record.optimized_content, None);
    }
}
