//! Bot server for the Skylark reply pipeline.
//!
//! Wires the Reddit listing, the fallback orchestrator, the Bluesky
//! publisher, and the posted-thread store into one scheduled loop:
//! - **BotPipeline**: one fetch-generate-publish-record cycle
//! - **RunnerBot**: actor serializing cycles through a message queue
//! - **BotServer**: interval scheduler with jitter plus the HTTP API

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod metrics;
mod pipeline;
mod runner;
mod server;
mod wiring;

pub use api::{ApiState, create_router};
pub use config::{
    BlueskyConfig, BotConfig, BotSchedule, LlmConfig, RedditConfig, ScheduleConfig, ServerConfig,
    StoreConfig,
};
pub use metrics::{BotMetrics, MetricsSnapshot};
pub use pipeline::{BotPipeline, RunReport};
pub use runner::{RunnerBot, RunnerMessage};
pub use server::BotServer;
pub use wiring::{bluesky_credentials, build_orchestrator};
