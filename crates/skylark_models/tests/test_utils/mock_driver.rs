//! Scripted driver for orchestrator testing.

use async_trait::async_trait;
use skylark_core::{GenerationRequest, ProviderId, ReplyDriver};
use skylark_error::{ProviderError, ProviderErrorKind, ProviderResult};
use std::sync::{Arc, Mutex};

/// A single scripted response.
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    Success(String),
    Failure(ProviderErrorKind),
}

/// Driver that plays back scripted outcomes and records how often it was
/// invoked, so tests can verify which providers the orchestrator reached.
pub struct ScriptedDriver {
    provider: ProviderId,
    outcomes: Vec<ScriptedOutcome>,
    call_count: Arc<Mutex<usize>>,
}

impl ScriptedDriver {
    /// Driver that always succeeds with the given text.
    pub fn succeeds(provider: ProviderId, text: impl Into<String>) -> Arc<Self> {
        Self::with_outcomes(provider, vec![ScriptedOutcome::Success(text.into())])
    }

    /// Driver that always fails with the given error kind.
    pub fn fails(provider: ProviderId, kind: ProviderErrorKind) -> Arc<Self> {
        Self::with_outcomes(provider, vec![ScriptedOutcome::Failure(kind)])
    }

    /// Driver that always fails with HTTP 429.
    pub fn rate_limited(provider: ProviderId) -> Arc<Self> {
        Self::fails(
            provider,
            ProviderErrorKind::from_status(429, "Too Many Requests"),
        )
    }

    /// Driver that plays back a sequence, repeating the last outcome once
    /// the script runs out.
    pub fn with_outcomes(provider: ProviderId, outcomes: Vec<ScriptedOutcome>) -> Arc<Self> {
        assert!(!outcomes.is_empty(), "script needs at least one outcome");
        Arc::new(Self {
            provider,
            outcomes,
            call_count: Arc::new(Mutex::new(0)),
        })
    }

    /// How many times `generate` was invoked.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    fn next_outcome(&self) -> ScriptedOutcome {
        let mut count = self.call_count.lock().unwrap();
        let index = (*count).min(self.outcomes.len() - 1);
        *count += 1;
        self.outcomes[index].clone()
    }
}

#[async_trait]
impl ReplyDriver for ScriptedDriver {
    async fn generate(&self, _req: &GenerationRequest) -> ProviderResult<String> {
        match self.next_outcome() {
            ScriptedOutcome::Success(text) => Ok(text),
            ScriptedOutcome::Failure(kind) => Err(ProviderError::new(kind)),
        }
    }

    fn provider_id(&self) -> ProviderId {
        self.provider
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}
