//! Reddit integration.
//!
//! Reads the public `hot.json` listing (no authentication), selects a
//! trending post worth replying to, and formats it for downstream use:
//!
//! - **json_models**: serde models for the listing envelope
//! - **client**: listing fetch through `old.reddit.com`
//! - **fetcher**: candidate filtering, random selection, and formatting

mod client;
mod fetcher;
mod json_models;

pub use client::{DEFAULT_USER_AGENT, RedditClient, subreddit_endpoint};
pub use fetcher::{
    MIN_TITLE_LEN, TOP_POST_WINDOW, format_post_summary, link_card_for_post, select_trending_post,
};
pub use json_models::{
    ListingData, ListingDataBuilder, ListingDataBuilderError, PostData, PostDataBuilder,
    PostDataBuilderError, RedditListing, RedditListingBuilder, RedditListingBuilderError,
    RedditPost, RedditPostBuilder, RedditPostBuilderError,
};
