//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_analyzer` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::process;

use page_analyzer::initialization::init_logger_with;
use page_analyzer::{
    Cli, Command, Config, ErrorCategory, OutputFormat, PageCheck, Registry, RegistryError,
    UrlDetail, UrlSummary,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from(&cli.global);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let registry = Registry::connect(&config)
        .await
        .with_context(|| format!("Failed to open database {}", config.db_path.display()))?;

    let output = cli.global.output;
    if let Err(e) = run_command(&registry, cli.command, output).await {
        let category = e.category();
        report_error(&e, category, output);
        if category.exit_code() != 0 {
            process::exit(category.exit_code());
        }
    }
    Ok(())
}

async fn run_command(
    registry: &Registry,
    command: Command,
    output: OutputFormat,
) -> Result<(), RegistryError> {
    match command {
        Command::Add { url } => {
            let url = registry.register(&url).await?;
            emit(output, &url, || {
                format!("Registered {} (id {})", url.name, url.id)
            });
        }
        Command::List => {
            let summaries = registry.list_with_last_check().await?;
            emit(output, &summaries, || render_summaries(&summaries));
        }
        Command::Show { id } => {
            let detail = registry
                .get_detail(id)
                .await?
                .ok_or(RegistryError::NotFound(id))?;
            emit(output, &detail, || render_detail(&detail));
        }
        Command::Check { id } => {
            let check = registry.run_check(id).await?;
            emit(output, &check, || render_check(&check));
        }
    }
    Ok(())
}

/// Writes `value` as JSON, or the plain rendering, to stdout.
fn emit<T: Serialize>(output: OutputFormat, value: &T, plain: impl FnOnce() -> String) {
    match output {
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("page-analyzer error: failed to serialize output: {e}"),
        },
        OutputFormat::Plain => println!("{}", plain()),
    }
}

fn report_error(error: &RegistryError, category: ErrorCategory, output: OutputFormat) {
    if output == OutputFormat::Json {
        let body = serde_json::json!({
            "error": {
                "category": category.as_str(),
                "message": error.to_string(),
            }
        });
        println!("{body}");
        return;
    }
    match category {
        ErrorCategory::Informational => println!("{error}"),
        ErrorCategory::Failure => eprintln!("page-analyzer error: {error}"),
        ErrorCategory::Validation | ErrorCategory::NotFound => eprintln!("{error}"),
    }
}

fn render_summaries(summaries: &[UrlSummary]) -> String {
    if summaries.is_empty() {
        return "No URLs registered".to_string();
    }
    summaries
        .iter()
        .map(|summary| {
            let last = match &summary.last_check {
                Some(check) => format!(
                    "{}  {}",
                    check.created_at.format("%Y-%m-%d %H:%M:%S"),
                    status_label(check)
                ),
                None => "never checked".to_string(),
            };
            format!("{:>4}  {}  {}", summary.url.id, summary.url.name, last)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_detail(detail: &UrlDetail) -> String {
    let mut lines = vec![
        format!("{} (id {})", detail.url.name, detail.url.id),
        format!(
            "Registered {}",
            detail.url.created_at.format("%Y-%m-%d %H:%M:%S")
        ),
    ];
    if detail.checks.is_empty() {
        lines.push("No checks yet".to_string());
    }
    lines.extend(detail.checks.iter().map(render_check));
    lines.join("\n")
}

fn render_check(check: &PageCheck) -> String {
    format!(
        "#{}  {}  {}  title={}  h1={}  description={}",
        check.id,
        check.created_at.format("%Y-%m-%d %H:%M:%S"),
        status_label(check),
        check.title.as_deref().unwrap_or("-"),
        check.h1.as_deref().unwrap_or("-"),
        check.description.as_deref().unwrap_or("-"),
    )
}

fn status_label(check: &PageCheck) -> String {
    if check.is_fetch_failure() {
        "unreachable".to_string()
    } else {
        check.status_code.to_string()
    }
}
