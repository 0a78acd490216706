//! Serde models for the Reddit `hot.json` listing envelope.
//!
//! These mirror the subset of the listing payload the bot actually uses.
//! Unknown fields are ignored during deserialization, so the models stay
//! stable as Reddit adds keys.

use serde::{Deserialize, Serialize};

/// Top-level envelope of a listing response.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct RedditListing {
    /// Envelope kind tag (`Listing`)
    #[serde(default)]
    #[builder(default)]
    kind: String,
    /// Listing payload
    data: ListingData,
}

/// Listing payload carrying the post entries.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ListingData {
    /// Post entries in listing order
    children: Vec<RedditPost>,
}

/// One listing entry wrapping the post payload.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct RedditPost {
    /// Post payload
    data: PostData,
}

/// Post fields used by selection, formatting, and the link card.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct PostData {
    /// Base-36 post id
    id: String,
    /// Post title
    title: String,
    /// Self-post body (empty for link posts)
    #[serde(default)]
    #[builder(default)]
    selftext: String,
    /// Upvote score
    score: i64,
    /// Site-relative permalink
    permalink: String,
    /// Target URL (external link, or the permalink for self posts)
    #[serde(default)]
    #[builder(default)]
    url: String,
    /// Subreddit name without the `r/` prefix
    subreddit: String,
    /// Author username without the `u/` prefix
    author: String,
    /// Creation time in epoch seconds
    #[serde(default)]
    #[builder(default)]
    created_utc: f64,
    /// Thumbnail URL, or a keyword like `self` or `default`
    #[serde(default)]
    #[builder(default)]
    thumbnail: Option<String>,
}
