//! Bot server wiring the runner actor, the jittered scheduler, and the
//! HTTP API together.

use crate::api::{ApiState, create_router};
use crate::config::{BotConfig, BotSchedule};
use crate::metrics::BotMetrics;
use crate::pipeline::BotPipeline;
use crate::runner::{RunnerBot, RunnerMessage};
use rand::Rng;
use skylark_error::{HttpError, SkylarkResult};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{error, info, instrument};

/// Bot server running the scheduled reply loop and the HTTP API.
pub struct BotServer {
    config: BotConfig,
    schedule: BotSchedule,
    pipeline: BotPipeline,
    metrics: BotMetrics,
}

impl BotServer {
    /// Creates a new bot server from configuration.
    pub fn new(config: BotConfig) -> SkylarkResult<Self> {
        let schedule = BotSchedule::from(&config);
        let pipeline = BotPipeline::new(config.clone())?;
        Ok(Self {
            config,
            schedule,
            pipeline,
            metrics: BotMetrics::new(),
        })
    }

    /// Starts the runner actor and the scheduler, then serves the API.
    ///
    /// Blocks until the API listener fails; the scheduler and runner run
    /// until the process exits.
    #[instrument(skip(self))]
    pub async fn start(self) -> SkylarkResult<()> {
        info!("starting bot server");

        let (tx, rx) = mpsc::channel(32);

        let runner = RunnerBot::new(self.pipeline.clone(), self.metrics.clone(), rx);
        tokio::spawn(async move {
            runner.run().await;
        });

        Self::spawn_scheduler(self.schedule.clone(), tx);

        let state = ApiState::new(self.pipeline, self.metrics);
        let router = create_router(state);
        let listener = tokio::net::TcpListener::bind(&self.config.server.bind)
            .await
            .map_err(|e| {
                HttpError::new(format!("Failed to bind {}: {}", self.config.server.bind, e))
            })?;
        info!(address = %self.config.server.bind, "api listening");

        axum::serve(listener, router)
            .await
            .map_err(|e| HttpError::new(format!("API server failed: {}", e)))?;

        info!("bot server stopped");
        Ok(())
    }

    fn spawn_scheduler(schedule: BotSchedule, tx: mpsc::Sender<RunnerMessage>) {
        tokio::spawn(async move {
            loop {
                let delay = jittered_delay(&schedule);
                info!(delay_secs = delay.as_secs(), "next run scheduled");

                sleep(delay).await;

                if tx.send(RunnerMessage::Run).await.is_err() {
                    error!("runner channel closed");
                    break;
                }
            }
        });
    }
}

/// Base interval with symmetric random jitter applied.
fn jittered_delay(schedule: &BotSchedule) -> Duration {
    let jitter_secs = schedule.jitter.as_secs();

    let mut rng = rand::thread_rng();
    let jitter = Duration::from_secs(rng.gen_range(0..=jitter_secs));

    if rng.gen_bool(0.5) {
        schedule.run_interval + jitter
    } else {
        schedule.run_interval.saturating_sub(jitter)
    }
}
