//! Core data types for the Skylark reply bot.
//!
//! This crate provides the vocabulary shared across the workspace: provider
//! identity, the configured attempt order, generation request/reply types,
//! the outbound link card, and the driver trait every backend adapter
//! implements.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod card;
mod priority;
mod provider;
mod request;
mod traits;

pub use card::{LinkCard, LinkCardBuilder};
pub use priority::{DEFAULT_PRIORITY, resolve};
pub use provider::ProviderId;
pub use request::{GeneratedReply, GenerationRequest};
pub use traits::ReplyDriver;
