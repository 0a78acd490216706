//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Skylark - Reddit-to-Bluesky reply bot with multi-provider LLM fallback
#[derive(Parser, Debug)]
#[command(name = "skylark")]
#[command(about = "Reddit-to-Bluesky reply bot with multi-provider LLM fallback", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute one reply cycle and exit
    Run {
        /// Generate the reply without publishing or recording it
        #[arg(long)]
        dry_run: bool,

        /// Path to a configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Run the interval scheduler and the HTTP API
    Serve {
        /// Generate replies without publishing or recording them
        #[arg(long)]
        dry_run: bool,

        /// Path to a configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_flags_parse() {
        let cli = Cli::try_parse_from(["skylark", "run", "--dry-run", "--config", "alt.toml"])
            .expect("run command parses");
        match cli.command {
            Commands::Run {
                dry_run, config, ..
            } => {
                assert!(dry_run);
                assert_eq!(config, Some(PathBuf::from("alt.toml")));
            }
            other => panic!("expected run command, got {other:?}"),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["skylark", "serve", "--verbose"])
            .expect("global flag parses after subcommand");
        assert!(cli.verbose);
    }
}
