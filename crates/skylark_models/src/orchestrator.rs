//! Multi-provider fallback orchestration.
//!
//! The orchestrator owns a registry of [`ReplyDriver`] adapters keyed by
//! [`ProviderId`] and walks the configured priority order until one backend
//! produces a reply. Attempts are strictly sequential. A rate-limited
//! failure moves on to the next provider; any other failure ends the run
//! immediately with the failures collected so far.

use crate::prompt::tidy_reply;
use skylark_core::{DEFAULT_PRIORITY, GeneratedReply, GenerationRequest, ProviderId, ReplyDriver};
use skylark_error::{
    AttemptFailure, OrchestratorError, OrchestratorErrorKind, OrchestratorResult, ProviderError,
    RateLimitedError, SkylarkResult,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Record of one failed provider attempt within a run.
#[derive(Debug, Clone)]
pub struct ProviderFailure {
    /// Which provider failed
    pub provider: ProviderId,
    /// The error it produced
    pub error: ProviderError,
    /// Whether the failure classified as a rate limit
    pub rate_limited: bool,
}

impl ProviderFailure {
    /// Create a new failure record.
    pub fn new(provider: ProviderId, error: ProviderError, rate_limited: bool) -> Self {
        Self {
            provider,
            error,
            rate_limited,
        }
    }
}

impl From<&ProviderFailure> for AttemptFailure {
    fn from(failure: &ProviderFailure) -> Self {
        AttemptFailure::new(
            failure.provider.to_string(),
            failure.error.kind.to_string(),
            failure.rate_limited,
        )
    }
}

/// Builder for [`FallbackOrchestrator`].
///
/// Adapters register keyed by their own [`ProviderId`]; the priority list
/// defaults to [`DEFAULT_PRIORITY`] when not set explicitly.
#[derive(Default)]
pub struct FallbackOrchestratorBuilder {
    drivers: HashMap<ProviderId, Arc<dyn ReplyDriver>>,
    priority: Option<Vec<ProviderId>>,
}

impl FallbackOrchestratorBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter under its own provider id.
    ///
    /// Registering a second adapter for the same provider replaces the
    /// first and logs a warning.
    pub fn register(mut self, driver: Arc<dyn ReplyDriver>) -> Self {
        let provider = driver.provider_id();
        if self.drivers.insert(provider, driver).is_some() {
            warn!(provider = %provider, "replacing previously registered driver");
        }
        self
    }

    /// Set the priority order for fallback.
    pub fn priority(mut self, priority: Vec<ProviderId>) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Build the orchestrator.
    ///
    /// Priority entries without a registered adapter are dropped with a
    /// warning. Fails with [`OrchestratorErrorKind::NoProvidersAvailable`]
    /// when the effective list ends up empty.
    pub fn build(self) -> OrchestratorResult<FallbackOrchestrator> {
        let requested = self
            .priority
            .unwrap_or_else(|| DEFAULT_PRIORITY.to_vec());
        let mut effective = Vec::with_capacity(requested.len());
        for provider in requested {
            if effective.contains(&provider) {
                continue;
            }
            if self.drivers.contains_key(&provider) {
                effective.push(provider);
            } else {
                warn!(provider = %provider, "no registered driver, dropping from priority");
            }
        }
        if effective.is_empty() {
            return Err(OrchestratorError::new(
                OrchestratorErrorKind::NoProvidersAvailable,
            ));
        }
        Ok(FallbackOrchestrator {
            drivers: self.drivers,
            priority: effective,
        })
    }
}

/// Walks registered providers in priority order until one produces a reply.
///
/// # Examples
///
/// ```no_run
/// use skylark_core::{GenerationRequest, ProviderId};
/// use skylark_models::{FallbackOrchestrator, GroqConfigBuilder, GroqDriver};
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let groq = GroqDriver::new(GroqConfigBuilder::default().api_key("gsk-test").build()?);
/// let orchestrator = FallbackOrchestrator::builder()
///     .register(Arc::new(groq))
///     .priority(vec![ProviderId::Groq])
///     .build()?;
/// let request = GenerationRequest::new("Title: crab rave", "https://reddit.com/r/rust/");
/// let reply = orchestrator.generate(&request).await?;
/// println!("{}", reply.text);
/// # Ok(())
/// # }
/// ```
pub struct FallbackOrchestrator {
    drivers: HashMap<ProviderId, Arc<dyn ReplyDriver>>,
    priority: Vec<ProviderId>,
}

impl std::fmt::Debug for FallbackOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackOrchestrator")
            .field("priority", &self.priority)
            .field("drivers", &self.drivers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FallbackOrchestrator {
    /// Start building an orchestrator.
    pub fn builder() -> FallbackOrchestratorBuilder {
        FallbackOrchestratorBuilder::new()
    }

    /// The effective priority order this orchestrator walks.
    pub fn priority(&self) -> &[ProviderId] {
        &self.priority
    }

    /// Run the request against providers in priority order.
    ///
    /// Returns the first successful reply, cleaned up via
    /// [`tidy_reply`](crate::tidy_reply) and attributed to the provider
    /// that produced it. Fails with
    /// [`OrchestratorErrorKind::AllProvidersFailed`] carrying every
    /// attempted failure in order.
    #[instrument(skip(self, request), fields(providers = self.priority.len()))]
    pub async fn generate(&self, request: &GenerationRequest) -> SkylarkResult<GeneratedReply> {
        let total = self.priority.len();
        let mut failures: Vec<ProviderFailure> = Vec::new();

        for (index, provider) in self.priority.iter().copied().enumerate() {
            let Some(driver) = self.drivers.get(&provider) else {
                continue;
            };
            info!(
                provider = %provider,
                model = driver.model_name(),
                attempt = index + 1,
                total,
                "attempting generation"
            );
            match driver.generate(request).await {
                Ok(text) => {
                    if !failures.is_empty() {
                        info!(
                            provider = %provider,
                            failed_attempts = failures.len(),
                            "recovered after earlier providers failed"
                        );
                    }
                    return Ok(GeneratedReply::new(tidy_reply(&text), provider));
                }
                Err(error) => {
                    let rate_limited = error.is_rate_limited();
                    let remaining = total - index - 1;
                    warn!(
                        provider = %provider,
                        rate_limited,
                        remaining,
                        error = %error.kind,
                        "provider attempt failed"
                    );
                    failures.push(ProviderFailure::new(provider, error, rate_limited));
                    if rate_limited && remaining > 0 {
                        continue;
                    }
                    break;
                }
            }
        }

        if failures.is_empty() {
            return Err(OrchestratorError::new(OrchestratorErrorKind::NoProvidersAvailable).into());
        }
        let attempts = failures.iter().map(AttemptFailure::from).collect();
        Err(OrchestratorError::new(OrchestratorErrorKind::AllProvidersFailed(attempts)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use skylark_error::ProviderResult;

    struct StubDriver(ProviderId);

    #[async_trait]
    impl ReplyDriver for StubDriver {
        async fn generate(&self, _req: &GenerationRequest) -> ProviderResult<String> {
            Ok("stub".to_string())
        }

        fn provider_id(&self) -> ProviderId {
            self.0
        }

        fn model_name(&self) -> &str {
            "stub-model"
        }
    }

    #[test]
    fn build_fails_without_drivers() {
        let err = FallbackOrchestrator::builder().build().unwrap_err();
        assert!(matches!(
            err.kind,
            OrchestratorErrorKind::NoProvidersAvailable
        ));
    }

    #[test]
    fn build_drops_unregistered_priority_entries() {
        let orchestrator = FallbackOrchestrator::builder()
            .register(Arc::new(StubDriver(ProviderId::Groq)))
            .priority(vec![ProviderId::Cloudflare, ProviderId::Groq])
            .build()
            .unwrap();
        assert_eq!(orchestrator.priority(), &[ProviderId::Groq]);
    }

    #[test]
    fn build_defaults_priority_to_registered_subset() {
        let orchestrator = FallbackOrchestrator::builder()
            .register(Arc::new(StubDriver(ProviderId::Gemini)))
            .register(Arc::new(StubDriver(ProviderId::Cloudflare)))
            .build()
            .unwrap();
        assert_eq!(
            orchestrator.priority(),
            &[ProviderId::Cloudflare, ProviderId::Gemini]
        );
    }

    #[test]
    fn build_deduplicates_priority() {
        let orchestrator = FallbackOrchestrator::builder()
            .register(Arc::new(StubDriver(ProviderId::Groq)))
            .register(Arc::new(StubDriver(ProviderId::Gemini)))
            .priority(vec![ProviderId::Groq, ProviderId::Gemini, ProviderId::Groq])
            .build()
            .unwrap();
        assert_eq!(
            orchestrator.priority(),
            &[ProviderId::Groq, ProviderId::Gemini]
        );
    }
}
