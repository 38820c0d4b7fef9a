// Integration tests for promptdash
// This file serves as the main entry point for integration tests

mod common;

// Include all integration test modules
#[path = "integration/filtering.rs"]
mod filtering;

#[path = "integration/save_actions.rs"]
mod save_actions;

#[path = "integration/api_types.rs"]
mod api_types;

#[path = "integration/ui_state.rs"]
mod ui_state;
