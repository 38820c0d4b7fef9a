// Terminal UI using Ratatui

pub mod components;
pub mod constants;
pub mod events;
pub mod help;
pub mod patterns;
pub mod prompt;
pub mod quit_modal;
pub mod registry;
pub mod state;

pub use events::{run_ui, run_ui_with_options};
pub use help::{HelpModal, HelpModalState, HelpSection};
pub use patterns::PatternsScreen;
pub use prompt::PromptScreen;
pub use quit_modal::QuitModal;
pub use registry::RegistryScreen;
pub use state::AppState;
