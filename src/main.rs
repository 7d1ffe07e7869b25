// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::Result;
use b1ddi::commands::{execute, Command, RunOptions};
use b1ddi::reconcilers::ImmutableFieldPolicy;
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};

/// Reconcile BloxOne DDI resources against a declared configuration.
#[derive(Debug, Parser)]
#[command(name = "b1ddi", version, about)]
struct Cli {
    /// CSP URL (falls back to the parameter document, then BLOXONE_CSP_URL)
    #[arg(long)]
    csp_url: Option<String>,

    /// API key (falls back to the parameter document, then BLOXONE_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Report what would change without changing anything
    #[arg(long)]
    check: bool,

    /// What to do when an update would change a read-only field
    #[arg(long, value_enum, default_value_t = ImmutableFieldPolicy::Fail)]
    immutable_fields: ImmutableFieldPolicy,

    /// Command to run
    #[arg(value_enum)]
    command: Command,

    /// YAML or JSON parameter document, `-` for stdin
    params: PathBuf,
}

impl Cli {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            csp_url: self.csp_url.clone(),
            api_key: self.api_key.clone(),
            check_mode: self.check,
            immutable_fields: self.immutable_fields,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(document) => {
            println!("{document}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(command = ?cli.command, "Command failed: {e}");
            println!("{}", json!({"failed": true, "msg": e.to_string()}));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<serde_json::Value> {
    // One command, one sequential chain of calls
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    info!(command = ?cli.command, check_mode = cli.check, "Starting b1ddi");
    runtime.block_on(execute(cli.command, &cli.params, &cli.run_options()))
}

/// Logs go to stderr so stdout carries only the result document.
///
/// Respects `RUST_LOG` (default `info`) and `RUST_LOG_FORMAT=json|text`.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(false)
                .compact()
                .init();
        }
    }

    debug!("Logging initialized with file and line number tracking");
}
