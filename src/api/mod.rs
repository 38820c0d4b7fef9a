// Thin client for the remote prompt API

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError};
pub use types::{
    AnalyzeResponse, HistoryEntry, NewPrompt, OptimizeResponse, PromptRecord, PromptUpdate,
    SaveRequest, derive_title,
};
