//! LLM provider adapters and fallback orchestration for Skylark.
//!
//! This crate provides the three generation backends (Cloudflare Workers AI,
//! Groq, Google Gemini) behind the shared [`skylark_core::ReplyDriver`]
//! trait, plus the [`FallbackOrchestrator`] that walks the configured
//! priority order until one backend produces a reply.
//!
//! # Example
//!
//! ```no_run
//! use skylark_core::{GenerationRequest, DEFAULT_PRIORITY};
//! use skylark_models::{FallbackOrchestrator, GroqConfigBuilder, GroqDriver};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let groq = GroqDriver::new(
//!     GroqConfigBuilder::default()
//!         .api_key("gsk-test")
//!         .build()?,
//! );
//! let orchestrator = FallbackOrchestrator::builder()
//!     .register(Arc::new(groq))
//!     .priority(DEFAULT_PRIORITY.to_vec())
//!     .build()?;
//! let request = GenerationRequest::new("Title: hot post", "https://reddit.com/r/rust/");
//! let reply = orchestrator.generate(&request).await?;
//! println!("{} said: {}", reply.provider, reply.text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cloudflare;
mod gemini;
mod groq;
mod openai_compat;
mod orchestrator;
mod prompt;

pub use cloudflare::{
    CloudflareConfig, CloudflareConfigBuilder, CloudflareConfigBuilderError, CloudflareDriver,
};
pub use gemini::{GeminiClient, GeminiConfig, GeminiConfigBuilder, GeminiConfigBuilderError};
pub use groq::{GroqConfig, GroqConfigBuilder, GroqConfigBuilderError, GroqDriver};
pub use openai_compat::OpenAICompatibleClient;
pub use orchestrator::{FallbackOrchestrator, FallbackOrchestratorBuilder, ProviderFailure};
pub use prompt::{SYSTEM_PROMPT, tidy_reply, user_prompt};
