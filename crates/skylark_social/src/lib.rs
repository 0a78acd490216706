//! Social platform integrations for the Skylark reply bot.
//!
//! This crate covers both ends of the pipeline around reply generation:
//! - `reddit` - listing client, trending-post selection, and post formatting
//! - `bluesky` - session handling, rich-text link facets, blob upload, and
//!   post publishing
//!
//! Plus shared outbound text cleanup (`strip_reddit_urls`), applied before
//! anything leaves the bot.
//!
//! Platform implementations follow a common pattern:
//! - Wire envelopes as dedicated serde model modules
//! - A client owning the `reqwest` handle and credentials
//! - Errors routed through the foundation types in `skylark_error`

#![warn(missing_docs)]

mod bluesky;
mod reddit;
mod text;

pub use bluesky::{
    BlueskyClient, BlueskySession, ByteSlice, DEFAULT_SERVICE, Facet, LinkFeature, PostReceipt,
    detect_link_facets,
};
pub use reddit::{
    DEFAULT_USER_AGENT, ListingData, ListingDataBuilder, ListingDataBuilderError, MIN_TITLE_LEN,
    PostData, PostDataBuilder, PostDataBuilderError, RedditClient, RedditListing,
    RedditListingBuilder, RedditListingBuilderError, RedditPost, RedditPostBuilder,
    RedditPostBuilderError, TOP_POST_WINDOW, format_post_summary, link_card_for_post,
    select_trending_post, subreddit_endpoint,
};
pub use text::strip_reddit_urls;
