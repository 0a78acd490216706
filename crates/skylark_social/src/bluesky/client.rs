//! Session and posting client for Bluesky.

use crate::bluesky::facets::detect_link_facets;
use crate::bluesky::json_models::{
    BlueskySession, CreateRecordRequest, CreateSessionRequest, ExternalCard, ExternalEmbed,
    PostReceipt, PostRecord, UploadBlobResponse,
};
use crate::text::strip_reddit_urls;
use chrono::{SecondsFormat, Utc};
use skylark_core::LinkCard;
use skylark_error::{BlueskyError, BlueskyErrorKind, BlueskyResult};
use tracing::{info, instrument, warn};

/// Default XRPC service URL.
pub const DEFAULT_SERVICE: &str = "https://bsky.social";

const POST_COLLECTION: &str = "app.bsky.feed.post";
const ERROR_EXCERPT_LEN: usize = 300;

fn body_excerpt(body: &str) -> String {
    body.trim().chars().take(ERROR_EXCERPT_LEN).collect()
}

/// Authenticated Bluesky client.
///
/// Obtained through [`BlueskyClient::login`]; holds the session token and
/// the account DID for record creation.
pub struct BlueskyClient {
    client: reqwest::Client,
    service: String,
    session: BlueskySession,
}

impl BlueskyClient {
    /// Log in with an app password and return an authenticated client.
    #[instrument(skip(password))]
    pub async fn login(service: &str, identifier: &str, password: &str) -> BlueskyResult<Self> {
        let client = reqwest::Client::new();
        let url = format!("{}/xrpc/com.atproto.server.createSession", service);
        let response = client
            .post(&url)
            .json(&CreateSessionRequest {
                identifier,
                password,
            })
            .send()
            .await
            .map_err(|e| BlueskyError::new(BlueskyErrorKind::Request(e.to_string())))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(BlueskyError::new(BlueskyErrorKind::Authentication(
                format!("HTTP {}: {}", status, body_excerpt(&body)),
            )));
        }

        let session = response
            .json::<BlueskySession>()
            .await
            .map_err(|e| BlueskyError::new(BlueskyErrorKind::Parsing(e.to_string())))?;
        info!(handle = %session.handle(), did = %session.did(), "logged in to Bluesky");

        Ok(Self {
            client,
            service: service.to_string(),
            session,
        })
    }

    /// The active session.
    pub fn session(&self) -> &BlueskySession {
        &self.session
    }

    /// Publish a post, optionally with a link card embed.
    ///
    /// The text is cleaned of Reddit URLs before facet detection, so the
    /// published record never links back to the source thread in its body.
    /// The card thumbnail is best-effort: any upload failure is logged and
    /// the post goes out without a thumb.
    #[instrument(skip(self, text, card), fields(has_card = card.is_some()))]
    pub async fn publish(
        &self,
        text: &str,
        card: Option<&LinkCard>,
    ) -> BlueskyResult<PostReceipt> {
        let cleaned = strip_reddit_urls(text);
        let facets = detect_link_facets(&cleaned);

        let embed = match card {
            Some(card) => Some(self.build_embed(card).await),
            None => None,
        };

        let record = PostRecord {
            record_type: POST_COLLECTION,
            text: &cleaned,
            facets,
            embed,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let request = CreateRecordRequest {
            repo: self.session.did(),
            collection: POST_COLLECTION,
            record,
        };

        let url = format!("{}/xrpc/com.atproto.repo.createRecord", self.service);
        let response = self
            .client
            .post(&url)
            .bearer_auth(self.session.access_jwt())
            .json(&request)
            .send()
            .await
            .map_err(|e| BlueskyError::new(BlueskyErrorKind::Request(e.to_string())))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(BlueskyError::new(BlueskyErrorKind::PostCreation(format!(
                "HTTP {}: {}",
                status,
                body_excerpt(&body)
            ))));
        }

        let receipt = response
            .json::<PostReceipt>()
            .await
            .map_err(|e| BlueskyError::new(BlueskyErrorKind::Parsing(e.to_string())))?;
        info!(uri = %receipt.uri(), "posted to Bluesky");
        Ok(receipt)
    }

    async fn build_embed<'a>(&self, card: &'a LinkCard) -> ExternalEmbed<'a> {
        let thumb = match card.thumb_url() {
            Some(thumb_url) if thumb_url.starts_with("http") => {
                match self.fetch_and_upload_thumb(thumb_url).await {
                    Ok(blob) => Some(blob),
                    Err(e) => {
                        warn!(error = %e, "thumbnail upload failed, posting without thumb");
                        None
                    }
                }
            }
            _ => None,
        };

        ExternalEmbed {
            embed_type: "app.bsky.embed.external",
            external: ExternalCard {
                uri: card.uri().as_str(),
                title: card.title().as_str(),
                description: card.description().as_str(),
                thumb,
            },
        }
    }

    async fn fetch_and_upload_thumb(&self, thumb_url: &str) -> BlueskyResult<serde_json::Value> {
        info!(url = %thumb_url, "fetching thumbnail");
        let response = self.client.get(thumb_url).send().await.map_err(|e| {
            BlueskyError::new(BlueskyErrorKind::BlobUpload(format!(
                "thumbnail fetch failed: {e}"
            )))
        })?;
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(BlueskyError::new(BlueskyErrorKind::BlobUpload(format!(
                "thumbnail fetch returned HTTP {status}"
            ))));
        }

        let encoding = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_string();
        let bytes = response.bytes().await.map_err(|e| {
            BlueskyError::new(BlueskyErrorKind::BlobUpload(format!(
                "thumbnail read failed: {e}"
            )))
        })?;

        let url = format!("{}/xrpc/com.atproto.repo.uploadBlob", self.service);
        let response = self
            .client
            .post(&url)
            .bearer_auth(self.session.access_jwt())
            .header("Content-Type", encoding)
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                BlueskyError::new(BlueskyErrorKind::BlobUpload(format!(
                    "blob upload failed: {e}"
                )))
            })?;
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(BlueskyError::new(BlueskyErrorKind::BlobUpload(format!(
                "blob upload returned HTTP {status}"
            ))));
        }

        let upload = response
            .json::<UploadBlobResponse>()
            .await
            .map_err(|e| BlueskyError::new(BlueskyErrorKind::Parsing(e.to_string())))?;
        info!("thumbnail uploaded");
        Ok(upload.blob)
    }
}
