//! Outbound link preview card.

use serde::{Deserialize, Serialize};

/// External link card attached to an outgoing post.
///
/// Built from the selected source post; the publishing layer turns it
/// into the platform's embed representation.
///
/// # Examples
///
/// ```
/// use skylark_core::LinkCardBuilder;
///
/// let card = LinkCardBuilder::default()
///     .uri("https://reddit.com/r/rust/comments/abc123/ferris/")
///     .title("Ferris spotted in the wild")
///     .description("Reddit post in r/rust by u/crab_fan")
///     .build()
///     .unwrap();
/// assert!(card.thumb_url().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct LinkCard {
    /// Target URL
    uri: String,
    /// Card title
    title: String,
    /// Card description
    description: String,
    /// Thumbnail URL (optional)
    #[serde(default)]
    #[builder(default)]
    thumb_url: Option<String>,
}

impl LinkCard {
    /// Create a card with every field given directly.
    pub fn new(
        uri: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        thumb_url: Option<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
            description: description.into(),
            thumb_url,
        }
    }
}
