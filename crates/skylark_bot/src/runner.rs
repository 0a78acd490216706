//! Runner actor serializing reply cycles through a message queue.

use crate::metrics::BotMetrics;
use crate::pipeline::BotPipeline;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Message types for the runner bot.
#[derive(Debug)]
pub enum RunnerMessage {
    /// Execute one reply cycle
    Run,
    /// Shutdown the bot
    Shutdown,
}

/// Actor that executes reply cycles one at a time.
///
/// Every trigger goes through the same queue, so scheduled runs never
/// overlap each other.
pub struct RunnerBot {
    pipeline: BotPipeline,
    metrics: BotMetrics,
    rx: mpsc::Receiver<RunnerMessage>,
}

impl RunnerBot {
    /// Creates a new runner bot.
    pub fn new(
        pipeline: BotPipeline,
        metrics: BotMetrics,
        rx: mpsc::Receiver<RunnerMessage>,
    ) -> Self {
        Self {
            pipeline,
            metrics,
            rx,
        }
    }

    /// Runs the bot loop.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        info!("runner bot started");

        while let Some(msg) = self.rx.recv().await {
            match msg {
                RunnerMessage::Run => {
                    self.metrics.record_run();
                    match self.pipeline.run_once().await {
                        Ok(report) => self.metrics.record_report(&report),
                        Err(e) => {
                            self.metrics.record_failure();
                            error!(error = %e, "reply cycle failed");
                        }
                    }
                }
                RunnerMessage::Shutdown => {
                    info!("runner bot shutting down");
                    break;
                }
            }
        }
    }
}
