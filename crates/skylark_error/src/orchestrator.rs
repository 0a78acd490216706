//! Fallback orchestrator error types.

/// Record of one failed provider attempt.
///
/// The orchestrator collects these in attempt order so the aggregated
/// error can report every backend that was tried and why it failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{}: {}", provider, message)]
pub struct AttemptFailure {
    /// Name of the provider that failed
    pub provider: String,
    /// The underlying error message
    pub message: String,
    /// Whether the failure classified as a rate limit
    pub rate_limited: bool,
}

impl AttemptFailure {
    /// Create a new attempt failure record.
    pub fn new(provider: impl Into<String>, message: impl Into<String>, rate_limited: bool) -> Self {
        Self {
            provider: provider.into(),
            message: message.into(),
            rate_limited,
        }
    }
}

fn format_attempts(failures: &[AttemptFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Orchestrator error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum OrchestratorErrorKind {
    /// Every attempted provider failed
    #[display("All providers failed: {}", format_attempts(_0))]
    AllProvidersFailed(Vec<AttemptFailure>),
    /// No providers registered for the configured priority list
    #[display("No providers available")]
    NoProvidersAvailable,
}

/// Orchestrator error with source location tracking.
///
/// # Examples
///
/// ```
/// use skylark_error::{AttemptFailure, OrchestratorError, OrchestratorErrorKind};
///
/// let failures = vec![
///     AttemptFailure::new("cloudflare", "HTTP 429 error: Too Many Requests", true),
///     AttemptFailure::new("groq", "HTTP 500 error: Internal Server Error", false),
/// ];
/// let err = OrchestratorError::new(OrchestratorErrorKind::AllProvidersFailed(failures));
/// let text = format!("{}", err);
/// assert!(text.contains("cloudflare: HTTP 429 error: Too Many Requests; groq:"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Orchestrator Error: {} at line {} in {}", kind, line, file)]
pub struct OrchestratorError {
    /// The kind of error that occurred
    pub kind: OrchestratorErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl OrchestratorError {
    /// Create a new OrchestratorError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OrchestratorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for orchestrator operations.
pub type OrchestratorResult<T> = std::result::Result<T, OrchestratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_preserves_attempt_order() {
        let failures = vec![
            AttemptFailure::new("cloudflare", "Rate limited (HTTP 429): slow down", true),
            AttemptFailure::new("groq", "Rate limited (HTTP 429): slow down", true),
            AttemptFailure::new("gemini", "HTTP 500 error: boom", false),
        ];
        let kind = OrchestratorErrorKind::AllProvidersFailed(failures);
        let text = kind.to_string();
        let cloudflare = text.find("cloudflare:").unwrap();
        let groq = text.find("groq:").unwrap();
        let gemini = text.find("gemini:").unwrap();
        assert!(cloudflare < groq && groq < gemini);
        assert_eq!(text.matches("; ").count(), 2);
    }

    #[test]
    fn single_failure_has_no_separator() {
        let kind = OrchestratorErrorKind::AllProvidersFailed(vec![AttemptFailure::new(
            "gemini",
            "HTTP 500 error: boom",
            false,
        )]);
        let text = kind.to_string();
        assert!(text.contains("gemini: HTTP 500 error: boom"));
        assert!(!text.contains("; "));
    }
}
