//! Trait definition for generation backends.

use crate::{GenerationRequest, ProviderId};
use async_trait::async_trait;
use skylark_error::ProviderResult;

/// Core trait that all generation backends implement.
///
/// An adapter performs exactly one completion call per invocation.
/// Fallback, classification, and failure aggregation live in the
/// orchestrator above it, so adapters stay free of retry logic.
#[async_trait]
pub trait ReplyDriver: Send + Sync {
    /// Produce a reply for the given request.
    async fn generate(&self, req: &GenerationRequest) -> ProviderResult<String>;

    /// Which backend this adapter talks to.
    fn provider_id(&self) -> ProviderId;

    /// Model identifier (e.g., "llama-3.3-70b-versatile").
    fn model_name(&self) -> &str;
}
