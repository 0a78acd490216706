//! Request and reply types for generation runs.

use crate::ProviderId;
use serde::{Deserialize, Serialize};

/// Input to one generation run.
///
/// Built once from the selected post and handed unchanged to every
/// adapter attempt within the run.
///
/// # Examples
///
/// ```
/// use skylark_core::GenerationRequest;
///
/// let req = GenerationRequest::new(
///     "Title: Ferris spotted in the wild",
///     "https://reddit.com/r/rust/comments/abc123/ferris/",
/// );
/// assert!(req.content.contains("Ferris"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Post summary text handed to the model
    pub content: String,
    /// Permalink of the source post
    pub source_url: String,
}

impl GenerationRequest {
    /// Create a new generation request.
    pub fn new(content: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source_url: source_url.into(),
        }
    }
}

/// A successful generation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReply {
    /// The reply text
    pub text: String,
    /// Which backend produced it
    pub provider: ProviderId,
}

impl GeneratedReply {
    /// Create a new reply attributed to a provider.
    pub fn new(text: impl Into<String>, provider: ProviderId) -> Self {
        Self {
            text: text.into(),
            provider,
        }
    }
}
