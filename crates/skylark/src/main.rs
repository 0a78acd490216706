//! Skylark CLI binary.
//!
//! This binary provides command-line access to the reply bot:
//! - Execute a single fetch-generate-publish cycle
//! - Serve the interval scheduler with the HTTP API

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_cycle, serve};

    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG takes precedence over the verbosity flag
    let default_directives = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Run {
            dry_run,
            config,
            format,
        } => {
            run_cycle(config, dry_run, format).await?;
        }

        Commands::Serve { dry_run, config } => {
            serve(config, dry_run).await?;
        }
    }

    Ok(())
}
