//! Scheduler and API command handler.

use super::run::load_config;
use skylark::{BotServer, SkylarkResult};
use std::path::PathBuf;

/// Handle the `serve` command.
pub async fn serve(config_path: Option<PathBuf>, dry_run: bool) -> SkylarkResult<()> {
    let mut config = load_config(config_path)?;
    if dry_run {
        config.dry_run = true;
    }

    let server = BotServer::new(config)?;

    tracing::info!("Reply bot starting. Press Ctrl+C to stop.");

    server.start().await
}
