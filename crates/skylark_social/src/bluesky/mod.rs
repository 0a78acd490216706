//! Bluesky integration.
//!
//! Publishes finished replies over the AT protocol XRPC surface:
//!
//! - **json_models**: wire envelopes for sessions, facets, embeds, and
//!   post records
//! - **facets**: link detection with UTF-8 byte offsets
//! - **client**: login, thumbnail blob upload, and record creation

mod client;
mod facets;
mod json_models;

pub use client::{BlueskyClient, DEFAULT_SERVICE};
pub use facets::detect_link_facets;
pub use json_models::{BlueskySession, ByteSlice, Facet, LinkFeature, PostReceipt};
