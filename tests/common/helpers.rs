#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use promptdash::api::{PromptRecord, derive_title};

/// Build a prompt record for tests. `age_minutes` counts back from a fixed
/// base instant, so a larger age means an older record.
pub fn make_prompt(
    id: &str,
    content: &str,
    optimized: Option<&str>,
    age_minutes: i64,
) -> PromptRecord {
    let base = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    PromptRecord {
        id: id.to_string(),
        title: derive_title(content),
        raw_content: content.to_string(),
        optimized_content: optimized.map(|s| s.to_string()),
        created_at: base - Duration::minutes(age_minutes),
    }
}
