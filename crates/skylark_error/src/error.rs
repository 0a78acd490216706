//! Top-level error wrapper types.

use crate::{
    BlueskyError, ConfigError, HttpError, JsonError, OrchestratorError, ProviderError, RedditError,
};
#[cfg(feature = "store")]
use crate::StoreError;

/// The foundation error enum aggregating every domain error in the
/// workspace.
///
/// # Examples
///
/// ```
/// use skylark_error::{SkylarkError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: SkylarkError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SkylarkErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Provider adapter error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Fallback orchestrator error
    #[from(OrchestratorError)]
    Orchestrator(OrchestratorError),
    /// Reddit listing error
    #[from(RedditError)]
    Reddit(RedditError),
    /// Bluesky client error
    #[from(BlueskyError)]
    Bluesky(BlueskyError),
    /// Posted-thread store error
    #[cfg(feature = "store")]
    #[from(StoreError)]
    Store(StoreError),
}

/// Skylark error with kind discrimination.
///
/// # Examples
///
/// ```
/// use skylark_error::{SkylarkResult, ConfigError};
///
/// fn might_fail() -> SkylarkResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Skylark Error: {}", _0)]
pub struct SkylarkError(Box<SkylarkErrorKind>);

impl SkylarkError {
    /// Create a new error from a kind.
    pub fn new(kind: SkylarkErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SkylarkErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to SkylarkErrorKind
impl<T> From<T> for SkylarkError
where
    T: Into<SkylarkErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Skylark operations.
///
/// # Examples
///
/// ```
/// use skylark_error::{SkylarkResult, HttpError};
///
/// fn fetch_data() -> SkylarkResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type SkylarkResult<T> = std::result::Result<T, SkylarkError>;
