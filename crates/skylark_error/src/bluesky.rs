//! Bluesky client error types.

/// Bluesky-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum BlueskyErrorKind {
    /// createSession was rejected
    #[display("Bluesky auth failed: {}", _0)]
    Authentication(String),
    /// Thumbnail blob upload failed
    #[display("Blob upload failed: {}", _0)]
    BlobUpload(String),
    /// createRecord was rejected
    #[display("Failed to post: {}", _0)]
    PostCreation(String),
    /// Transport-level request failure
    #[display("Request failed: {}", _0)]
    Request(String),
    /// Response body did not match the expected envelope
    #[display("Failed to parse response: {}", _0)]
    Parsing(String),
}

/// Bluesky error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Bluesky Error: {} at line {} in {}", kind, line, file)]
pub struct BlueskyError {
    /// The kind of error that occurred
    pub kind: BlueskyErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BlueskyError {
    /// Create a new BlueskyError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BlueskyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for Bluesky operations.
pub type BlueskyResult<T> = std::result::Result<T, BlueskyError>;
