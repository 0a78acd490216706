//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the skylark binary.

mod commands;
mod run;
mod serve;

pub use commands::{Cli, Commands, OutputFormat};
pub use run::run_cycle;
pub use serve::serve;
