// UI constants - single source of truth for labels and limits

use std::time::Duration;

// Screen tab titles, in navigation order
pub const TAB_TITLES: &[&str] = &["Prompt", "Patterns", "Registry"];

// How long a status toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

// Fallback advice shown when the backend omits it
pub const DEFAULT_OPTIMIZE_ADVICE: &str = "Prompt optimized for CO-STAR structure.";

// Fallback feedback-history text when the backend omits advice
pub const DEFAULT_FEEDBACK_TEXT: &str = "Optimization completed with CO-STAR structure.";

// Toast texts for save actions
pub const TOAST_DRAFT_SAVED: &str = "Draft saved successfully!";
pub const TOAST_DRAFT_UPDATED: &str = "Draft updated successfully!";
pub const TOAST_REGISTRY_SAVED: &str = "Prompt saved to registry!";
pub const TOAST_SAVE_FAILED: &str = "Save failed - check the API connection";
