//! Google Gemini REST API client.

mod client;

pub use client::{GeminiClient, GeminiConfig, GeminiConfigBuilder, GeminiConfigBuilderError};
