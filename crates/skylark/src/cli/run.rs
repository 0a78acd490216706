//! Single-cycle command handler.

use super::commands::OutputFormat;
use skylark::{BotConfig, BotPipeline, JsonError, RunReport, SkylarkResult};
use std::path::PathBuf;

/// Execute one reply cycle and print the outcome.
pub async fn run_cycle(
    config_path: Option<PathBuf>,
    dry_run: bool,
    format: OutputFormat,
) -> SkylarkResult<()> {
    let mut config = load_config(config_path)?;
    if dry_run {
        config.dry_run = true;
    }

    let pipeline = BotPipeline::new(config)?;
    let report = pipeline.run_once().await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => print_report(&report),
    }

    Ok(())
}

/// Load configuration from an explicit path or the default lookup chain.
pub(super) fn load_config(path: Option<PathBuf>) -> SkylarkResult<BotConfig> {
    match path {
        Some(path) => BotConfig::from_file(path),
        None => BotConfig::load(),
    }
}

fn print_report(report: &RunReport) {
    match report {
        RunReport::Posted {
            title,
            reply,
            provider,
            uri,
        } => {
            println!("Posted a reply for \"{}\"", title);
            println!("  Provider: {}", provider);
            println!("  Record:   {}", uri);
            println!();
            println!("{}", reply);
        }
        RunReport::DryRun {
            title,
            reply,
            provider,
        } => {
            println!("Dry run for \"{}\"", title);
            println!("  Provider: {}", provider);
            println!();
            println!("{}", reply);
        }
        RunReport::Skipped { reason } => {
            println!("Skipped: {}", reason);
        }
    }
}
