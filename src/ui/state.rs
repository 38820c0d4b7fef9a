// Application state management

use crate::api::types::{AnalyzeResponse, HistoryEntry, OptimizeResponse, PromptRecord};
use crate::ui::constants::{DEFAULT_FEEDBACK_TEXT, DEFAULT_OPTIMIZE_ADVICE};
use crate::ui::help::HelpModalState;
use ratatui::widgets::ListState;
use std::time::Instant;
use tui_textarea::TextArea;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Prompt,
    Patterns,
    Registry,
}

impl Screen {
    pub fn index(self) -> usize {
        match self {
            Self::Prompt => 0,
            Self::Patterns => 1,
            Self::Registry => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,  // Normal navigation mode - global shortcuts active
    Editing, // Text editing mode - character input active, global shortcuts inactive
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Transient toast shown near the footer
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub shown_at: Instant,
}

/// State for the quit confirmation modal
#[derive(Debug, Clone)]
pub struct QuitConfirmationState {
    /// Number of API requests currently in flight
    pub in_flight_count: usize,
}

pub struct AppState {
    pub current_screen: Screen,
    pub prompt: PromptTabState,
    pub patterns: PatternsState,
    pub registry: RegistryState,

    /// Registry contents as last fetched from the remote store
    pub prompts: Vec<PromptRecord>,

    pub search_query: String,
    pub search_editing: bool,

    // Loading flags - at most one in-flight request per action
    pub fetch_in_progress: bool,
    pub delete_in_progress: bool,

    pub help_modal: Option<HelpModalState>,
    pub quit_confirmation: Option<QuitConfirmationState>,
    pub status_message: Option<StatusMessage>,

    pub app_version: String,
    pub api_base_url: String,
    pub analysis_window: usize,
    pub sidebar_limit: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_screen: Screen::Prompt,
            prompt: PromptTabState::default(),
            patterns: PatternsState::default(),
            registry: RegistryState::default(),
            prompts: Vec::new(),
            search_query: String::new(),
            search_editing: false,
            fetch_in_progress: false,
            delete_in_progress: false,
            help_modal: None,
            quit_confirmation: None,
            status_message: None,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            api_base_url: String::new(),
            analysis_window: 10,
            sidebar_limit: 12,
        }
    }
}

impl AppState {
    /// All prompts, newest first
    pub fn sorted_prompts(&self) -> Vec<&PromptRecord> {
        let mut prompts: Vec<&PromptRecord> = self.prompts.iter().collect();
        prompts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        prompts
    }

    /// Prompts matching the current search query, newest first
    pub fn filtered_prompts(&self) -> Vec<&PromptRecord> {
        self.sorted_prompts()
            .into_iter()
            .filter(|p| matches_query(p, &self.search_query))
            .collect()
    }

    /// Drafts (no optimized content), newest first
    pub fn drafts(&self) -> Vec<&PromptRecord> {
        self.sorted_prompts()
            .into_iter()
            .filter(|p| p.is_draft())
            .collect()
    }

    /// Saved registry records (with optimized content), newest first
    pub fn saved(&self) -> Vec<&PromptRecord> {
        self.sorted_prompts()
            .into_iter()
            .filter(|p| !p.is_draft())
            .collect()
    }

    /// Rows the registry screen navigates: filtered drafts first, then
    /// filtered saved records, each newest first
    pub fn registry_rows(&self) -> Vec<&PromptRecord> {
        let mut rows: Vec<&PromptRecord> = self
            .filtered_prompts()
            .into_iter()
            .filter(|p| p.is_draft())
            .collect();
        rows.extend(
            self.filtered_prompts()
                .into_iter()
                .filter(|p| !p.is_draft()),
        );
        rows
    }

    /// Raw content of the most recent prompts submitted for analysis
    pub fn analysis_window_contents(&self) -> Vec<String> {
        self.sorted_prompts()
            .iter()
            .take(self.analysis_window)
            .map(|p| p.raw_content.clone())
            .collect()
    }

    /// Remove exactly the targeted record from the displayed list
    pub fn delete_prompt_local(&mut self, id: &str) {
        self.prompts.retain(|p| p.id != id);
        self.registry.clamp_selection(self.registry_rows().len());
    }

    pub fn in_flight_count(&self) -> usize {
        [
            self.fetch_in_progress,
            self.delete_in_progress,
            self.prompt.optimizing,
            self.prompt.saving,
            self.patterns.analyzing,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Drop the toast once it has outlived its display window
    pub fn expire_status(&mut self, max_age: std::time::Duration) {
        if let Some(ref msg) = self.status_message {
            if msg.shown_at.elapsed() >= max_age {
                self.status_message = None;
            }
        }
    }
}

/// Case-insensitive substring match over title and raw content
pub fn matches_query(record: &PromptRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.raw_content.to_lowercase().contains(&needle)
}

pub struct PromptTabState {
    pub draft: TextArea<'static>,
    pub input_mode: InputMode,

    /// Which remote draft record the editor is editing, if any
    pub active_draft_id: Option<String>,

    pub optimized: Option<String>,
    pub advice: Option<String>,

    /// The exact draft text the optimized output was produced from
    pub last_optimized_input: Option<String>,

    pub optimizing: bool,
    pub saving: bool,

    pub feedback_history: Vec<HistoryEntry>,
    pub sidebar_state: ListState,
}

impl Default for PromptTabState {
    fn default() -> Self {
        Self {
            draft: new_draft_editor(""),
            input_mode: InputMode::Normal,
            active_draft_id: None,
            optimized: None,
            advice: None,
            last_optimized_input: None,
            optimizing: false,
            saving: false,
            feedback_history: Vec::new(),
            sidebar_state: ListState::default(),
        }
    }
}

impl PromptTabState {
    pub fn draft_text(&self) -> String {
        self.draft.lines().join("\n")
    }

    pub fn set_draft_text(&mut self, text: &str) {
        self.draft = new_draft_editor(text);
    }

    /// Loads content into the editor (sidebar selection). The selected
    /// record does not become the active draft.
    pub fn load_content(&mut self, content: &str) {
        self.set_draft_text(content);
    }

    /// Start editing an existing draft record
    pub fn begin_edit_record(&mut self, record: &PromptRecord) {
        self.set_draft_text(&record.raw_content);
        self.optimized = None;
        self.advice = None;
        self.last_optimized_input = None;
        self.active_draft_id = Some(record.id.clone());
    }

    /// Clear the editor and drop the active draft
    pub fn cancel_draft(&mut self) {
        self.set_draft_text("");
        self.optimized = None;
        self.advice = None;
        self.last_optimized_input = None;
        self.active_draft_id = None;
    }

    /// Record an optimize result and log it to the feedback history
    pub fn apply_optimize(&mut self, input: String, response: OptimizeResponse) {
        let advice = response
            .advice
            .clone()
            .unwrap_or_else(|| DEFAULT_OPTIMIZE_ADVICE.to_string());
        let feedback = response
            .advice
            .unwrap_or_else(|| DEFAULT_FEEDBACK_TEXT.to_string());

        self.optimized = Some(response.final_prompt);
        self.advice = Some(advice);
        self.last_optimized_input = Some(input);
        self.feedback_history.insert(0, HistoryEntry::new(feedback));
    }

    /// Save-to-registry is only valid while the draft still matches the
    /// text the optimized output was produced from
    pub fn can_save_to_registry(&self) -> bool {
        self.optimized.is_some()
            && self.last_optimized_input.as_deref() == Some(self.draft_text().as_str())
    }
}

pub struct PatternsState {
    pub analyzing: bool,
    pub last_analysis: Option<String>,
    pub history: Vec<HistoryEntry>,
    pub list_state: ListState,
}

impl Default for PatternsState {
    fn default() -> Self {
        Self {
            analyzing: false,
            last_analysis: None,
            history: Vec::new(),
            list_state: ListState::default(),
        }
    }
}

impl PatternsState {
    /// Record an analysis result and log it
    pub fn apply_analysis(&mut self, response: AnalyzeResponse) {
        self.last_analysis = Some(response.feedback.clone());
        self.history.insert(0, HistoryEntry::new(response.feedback));
        if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
    }

    /// Delete a log entry locally (analysis logs are never persisted)
    pub fn delete_entry(&mut self, index: usize) {
        if index < self.history.len() {
            self.history.remove(index);
        }
        if self.history.is_empty() {
            self.list_state.select(None);
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= self.history.len() {
                self.list_state.select(Some(self.history.len() - 1));
            }
        }
    }
}

pub struct RegistryState {
    pub list_state: ListState,
}

impl Default for RegistryState {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }
}

impl RegistryState {
    pub fn clamp_selection(&mut self, row_count: usize) {
        if row_count == 0 {
            self.list_state.select(None);
        } else {
            match self.list_state.selected() {
                Some(i) if i >= row_count => self.list_state.select(Some(row_count - 1)),
                None => self.list_state.select(Some(0)),
                _ => {}
            }
        }
    }
}

fn new_draft_editor(text: &str) -> TextArea<'static> {
    let mut editor = if text.is_empty() {
        TextArea::default()
    } else {
        TextArea::from(text.lines())
    };
    editor.set_placeholder_text("Draft your prompt here...");
    editor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_selection_initialized() {
        let state = RegistryState::default();
        assert!(state.list_state.selected().is_some());
    }

    #[test]
    fn test_draft_text_round_trip() {
        let mut prompt = PromptTabState::default();
        prompt.set_draft_text("first line\nsecond line");
        assert_eq!(prompt.draft_text(), "first line\nsecond line");
    }

    #[test]
    fn test_cancel_draft_clears_everything() {
        let mut prompt = PromptTabState::default();
        prompt.set_draft_text("content");
        prompt.active_draft_id = Some("abc".to_string());
        prompt.optimized = Some("better content".to_string());
        prompt.advice = Some("advice".to_string());
        prompt.last_optimized_input = Some("content".to_string());

        prompt.cancel_draft();

        assert_eq!(prompt.draft_text(), "");
        assert_eq!(prompt.active_draft_id, None);
        assert_eq!(prompt.optimized, None);
        assert_eq!(prompt.advice, None);
        assert_eq!(prompt.last_optimized_input, None);
    }

    #[test]
    fn test_in_flight_count() {
        let mut state = AppState::default();
        assert_eq!(state.in_flight_count(), 0);

        state.fetch_in_progress = true;
        state.prompt.optimizing = true;
        assert_eq!(state.in_flight_count(), 2);
    }
}
