// CLI subcommand handlers and TUI launch

use std::process;
use std::time::Duration;

use anyhow::Context;

use promptdash::api::ApiClient;
use promptdash::config::Config;
use promptdash::ui;
use promptdash::ui::state::matches_query;

use crate::cli::{Cli, Commands};

pub fn run(cli: Cli) {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {:#}", e);
        eprintln!("Using built-in defaults.");
        Config::default()
    });

    match cli.command {
        Some(Commands::CheckApi) => handle_check_api(&cli, &config),
        Some(Commands::List { ref query }) => handle_list(&cli, &config, query.as_deref()),
        Some(Commands::Optimize { ref text, ref file }) => {
            handle_optimize(&cli, &config, text.as_deref(), file.as_deref())
        }
        Some(Commands::Analyze) => handle_analyze(&cli, &config),
        Some(Commands::Delete { ref id }) => handle_delete(&cli, &config, id),
        Some(Commands::InitConfig) => handle_init_config(),
        None => launch_tui(cli, &config),
    }
}

fn launch_tui(cli: Cli, config: &Config) {
    let fetch_override = if cli.fetch {
        Some(true)
    } else if cli.no_fetch {
        Some(false)
    } else {
        None
    };

    if let Err(e) = ui::run_ui_with_options(cli.api_url, fetch_override, config) {
        eprintln!("Error running UI: {:#}", e);
        process::exit(1);
    }
}

fn build_client(cli: &Cli, config: &Config) -> anyhow::Result<ApiClient> {
    let base_url = cli
        .api_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());
    let client = ApiClient::new(&base_url, Duration::from_secs(config.api.timeout_secs))
        .context("building API client")?;
    Ok(client)
}

fn handle_check_api(cli: &Cli, config: &Config) {
    let result = build_client(cli, config).and_then(|client| {
        let records = client.fetch_all().context("contacting prompt API")?;
        Ok((client.base_url().to_string(), records.len()))
    });

    match result {
        Ok((url, count)) => {
            println!("OK: {} ({} prompts)", url, count);
        }
        Err(e) => {
            eprintln!("API check failed: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_list(cli: &Cli, config: &Config, query: Option<&str>) {
    let result = build_client(cli, config)
        .and_then(|client| client.fetch_all().context("fetching prompts"));

    let mut records = match result {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let query = query.unwrap_or("");
    let mut shown = 0;
    for record in records.iter().filter(|r| matches_query(r, query)) {
        let tag = if record.is_draft() { "DRAFT" } else { "SAVED" };
        println!(
            "{}  [{}]  {}  {}",
            record.id,
            tag,
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.title
        );
        shown += 1;
    }

    println!("{} prompt(s)", shown);
}

fn handle_optimize(cli: &Cli, config: &Config, text: Option<&str>, file: Option<&std::path::Path>) {
    let prompt = match (text, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        (None, None) => {
            eprintln!("Provide prompt text or --file");
            process::exit(1);
        }
    };

    if prompt.trim().is_empty() {
        eprintln!("Prompt is empty");
        process::exit(1);
    }

    let result = build_client(cli, config)
        .and_then(|client| client.optimize(&prompt).context("optimize request"));

    match result {
        Ok(response) => {
            if let Some(advice) = response.advice {
                println!("# Advice\n{}\n", advice);
            }
            println!("{}", response.final_prompt);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_analyze(cli: &Cli, config: &Config) {
    let window = config.defaults.analysis_window;
    let result = build_client(cli, config).and_then(|client| {
        let mut records = client.fetch_all().context("fetching prompts")?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let prompts: Vec<String> = records
            .into_iter()
            .take(window)
            .map(|r| r.raw_content)
            .collect();

        if prompts.is_empty() {
            anyhow::bail!("no prompts to analyze");
        }

        client.analyze(prompts).context("analyze request")
    });

    match result {
        Ok(response) => println!("{}", response.feedback),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_delete(cli: &Cli, config: &Config, id: &str) {
    let result =
        build_client(cli, config).and_then(|client| client.delete(id).context("delete request"));

    match result {
        Ok(()) => println!("Deleted {}", id),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_init_config() {
    let path = match Config::config_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    if Config::exists() {
        println!("Config file exists: {}", path.display());
        return;
    }

    match Config::default().save() {
        Ok(()) => println!("Created default config: {}", path.display()),
        Err(e) => {
            eprintln!("Error creating config: {:#}", e);
            process::exit(1);
        }
    }
}
