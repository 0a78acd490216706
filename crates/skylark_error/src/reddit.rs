//! Reddit listing error types.

/// Reddit-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RedditErrorKind {
    /// Listing endpoint answered with a non-success status
    #[display("Reddit API error: {} {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Status text or response body excerpt
        message: String,
    },
    /// Transport-level request failure
    #[display("Request failed: {}", _0)]
    Request(String),
    /// Listing body did not match the expected envelope
    #[display("Failed to parse listing: {}", _0)]
    Parsing(String),
}

/// Reddit error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Reddit Error: {} at line {} in {}", kind, line, file)]
pub struct RedditError {
    /// The kind of error that occurred
    pub kind: RedditErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RedditError {
    /// Create a new RedditError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RedditErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for Reddit operations.
pub type RedditResult<T> = std::result::Result<T, RedditError>;
