//! # Skylark
//!
//! Reddit-to-Bluesky reply bot with multi-provider LLM fallback.
//!
//! Skylark watches a subreddit listing for a trending post, writes a short
//! conversational reply with the first LLM provider in its priority chain
//! that has capacity, and publishes the reply to Bluesky with a link
//! preview card. A SQLite ledger remembers every thread the bot has
//! replied to so no thread is posted twice.
//!
//! # Quick Start
//!
//! ```no_run
//! use skylark::{BotConfig, BotPipeline};
//!
//! # async fn example() -> skylark::SkylarkResult<()> {
//! let config = BotConfig::load()?;
//! let pipeline = BotPipeline::new(config)?;
//! let report = pipeline.run_once().await?;
//! println!("{report:?}");
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Skylark is organized as a workspace with focused crates:
//!
//! - `skylark_error` - Error types
//! - `skylark_core` - Provider identity, priority resolution, request/reply types
//! - `skylark_models` - Provider adapters and the fallback orchestrator
//! - `skylark_social` - Reddit listing client and Bluesky publisher
//! - `skylark_store` - SQLite posted-thread ledger
//! - `skylark_bot` - Reply pipeline, scheduler, and HTTP API
//!
//! This crate (`skylark`) re-exports everything for convenience.

// Re-export workspace crates
pub use skylark_bot::*;
pub use skylark_core::*;
pub use skylark_error::*;
pub use skylark_models::*;
pub use skylark_social::*;
pub use skylark_store::*;
