//! Error types for the Skylark reply bot.
//!
//! This crate provides the foundation error types used throughout the Skylark
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use skylark_error::{SkylarkResult, HttpError};
//!
//! fn fetch_data() -> SkylarkResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod json;
mod config;
mod provider;
mod orchestrator;
mod reddit;
mod bluesky;
#[cfg(feature = "store")]
mod store;
mod error;

pub use http::HttpError;
pub use json::JsonError;
pub use config::ConfigError;
pub use provider::{ProviderError, ProviderErrorKind, ProviderResult, RateLimitedError};
pub use orchestrator::{
    AttemptFailure, OrchestratorError, OrchestratorErrorKind, OrchestratorResult,
};
pub use reddit::{RedditError, RedditErrorKind, RedditResult};
pub use bluesky::{BlueskyError, BlueskyErrorKind, BlueskyResult};
#[cfg(feature = "store")]
pub use store::{StoreError, StoreErrorKind, StoreResult};
pub use error::{SkylarkError, SkylarkErrorKind, SkylarkResult};
