//! Wire envelopes for the Bluesky XRPC endpoints.

use serde::{Deserialize, Serialize};

/// Authenticated session from `com.atproto.server.createSession`.
#[derive(Debug, Clone, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct BlueskySession {
    /// Bearer token for subsequent XRPC calls
    access_jwt: String,
    /// DID of the authenticated account
    did: String,
    /// Handle of the authenticated account
    #[serde(default)]
    handle: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateSessionRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

/// Byte range addressed by a facet.
///
/// Offsets are UTF-8 byte positions into the post text, per the AT
/// protocol rich-text model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ByteSlice {
    /// Inclusive start offset
    byte_start: usize,
    /// Exclusive end offset
    byte_end: usize,
}

impl ByteSlice {
    /// Create a byte range.
    pub fn new(byte_start: usize, byte_end: usize) -> Self {
        Self {
            byte_start,
            byte_end,
        }
    }
}

/// Link feature inside a facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct LinkFeature {
    /// Lexicon type tag (`app.bsky.richtext.facet#link`)
    #[serde(rename = "$type")]
    feature_type: String,
    /// Link target
    uri: String,
}

impl LinkFeature {
    /// Create a link feature pointing at `uri`.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            feature_type: "app.bsky.richtext.facet#link".to_string(),
            uri: uri.into(),
        }
    }
}

/// One rich-text facet over the post text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Facet {
    /// Addressed byte range
    index: ByteSlice,
    /// Features applying to the range
    features: Vec<LinkFeature>,
}

impl Facet {
    /// Create a facet from a byte range and its features.
    pub fn new(index: ByteSlice, features: Vec<LinkFeature>) -> Self {
        Self { index, features }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadBlobResponse {
    // The blob object is echoed verbatim into the embed, so it stays an
    // opaque JSON value here.
    pub blob: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExternalCard<'a> {
    pub uri: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExternalEmbed<'a> {
    #[serde(rename = "$type")]
    pub embed_type: &'a str,
    pub external: ExternalCard<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostRecord<'a> {
    #[serde(rename = "$type")]
    pub record_type: &'a str,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facets: Vec<Facet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<ExternalEmbed<'a>>,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateRecordRequest<'a> {
    pub repo: &'a str,
    pub collection: &'a str,
    pub record: PostRecord<'a>,
}

/// Receipt for a created post record.
#[derive(Debug, Clone, Serialize, Deserialize, derive_getters::Getters)]
pub struct PostReceipt {
    /// AT URI of the new record
    uri: String,
    /// CID of the new record
    cid: String,
}
