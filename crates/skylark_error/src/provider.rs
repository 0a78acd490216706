//! Provider adapter error types and rate-limit classification.

/// Provider-specific error conditions.
///
/// Adapters construct `RateLimited` deliberately when a backend answers
/// HTTP 429; every other failure keeps the backend's own wording so the
/// aggregated diagnostics stay faithful to what the API returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Required credential missing from the environment
    #[display("{} environment variable not set", _0)]
    MissingCredential(String),
    /// Backend rejected the request with HTTP 429
    #[display("Rate limited (HTTP {}): {}", status, message)]
    RateLimited {
        /// HTTP status code (429)
        status: u16,
        /// Error message from the backend
        message: String,
    },
    /// Backend answered with a non-success status other than 429
    #[display("HTTP {} error: {}", status, message)]
    Http {
        /// HTTP status code
        status: u16,
        /// Error message from the backend
        message: String,
    },
    /// Transport-level request failure
    #[display("Request failed: {}", _0)]
    Request(String),
    /// Response body did not match the expected envelope
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),
    /// Backend returned a well-formed response with no completion text
    #[display("Completion contained no content")]
    EmptyCompletion,
}

impl ProviderErrorKind {
    /// Build the kind for a non-success HTTP status.
    ///
    /// HTTP 429 constructs `RateLimited`; every other status maps to
    /// `Http` with the backend's message preserved verbatim.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == 429 {
            ProviderErrorKind::RateLimited { status, message }
        } else {
            ProviderErrorKind::Http { status, message }
        }
    }

    /// Check whether this failure should trigger fallback to the next
    /// provider.
    ///
    /// The `RateLimited` kind always classifies. Failures that arrive
    /// through other kinds still classify when their message carries a
    /// recognizable rate-limit signature (`429` or `rate limit`,
    /// case-insensitive), so transport-wrapped 429s behave the same.
    pub fn is_rate_limited(&self) -> bool {
        if matches!(self, ProviderErrorKind::RateLimited { .. }) {
            return true;
        }
        let text = self.to_string().to_lowercase();
        text.contains("429") || text.contains("rate limit")
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use skylark_error::{ProviderError, ProviderErrorKind, RateLimitedError};
///
/// let err = ProviderError::new(ProviderErrorKind::RateLimited {
///     status: 429,
///     message: "Too Many Requests".to_string(),
/// });
/// assert!(err.is_rate_limited());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for provider adapter operations.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Trait for errors that can represent a rate-limit rejection.
///
/// The fallback orchestrator consults this to decide whether a failed
/// attempt should continue down the priority list (rate limited) or
/// abort the run (anything else).
///
/// # Examples
///
/// ```
/// use skylark_error::{ProviderError, ProviderErrorKind, RateLimitedError};
///
/// let err = ProviderError::new(ProviderErrorKind::Http {
///     status: 500,
///     message: "Internal Server Error".to_string(),
/// });
/// assert!(!err.is_rate_limited());
/// ```
pub trait RateLimitedError {
    /// Returns true if this error represents a rate-limit rejection.
    fn is_rate_limited(&self) -> bool;
}

impl RateLimitedError for ProviderError {
    fn is_rate_limited(&self) -> bool {
        self.kind.is_rate_limited()
    }
}
