use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promptdash")]
#[command(about = "Prompt registry client with TUI", long_about = None)]
pub struct Cli {
    /// Base URL of the prompt API (overrides config)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Fetch the prompt list when the TUI launches (overrides config)
    #[arg(long, conflicts_with = "no_fetch")]
    pub fetch: bool,

    /// Don't fetch the prompt list when the TUI launches (overrides config)
    #[arg(long, conflicts_with = "fetch")]
    pub no_fetch: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the prompt API is reachable
    CheckApi,

    /// List saved prompts
    List {
        /// Only show prompts whose title or content contains this text
        #[arg(long)]
        query: Option<String>,
    },

    /// Optimize a prompt without launching the TUI
    Optimize {
        /// Prompt text (use --file for longer prompts)
        text: Option<String>,

        /// Read the prompt from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Run pattern analysis over the most recent saved prompts
    Analyze,

    /// Delete a prompt by its id
    Delete {
        /// Remote id of the prompt to delete
        id: String,
    },

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
