//! Listing client for the public Reddit JSON feed.

use crate::reddit::json_models::RedditListing;
use skylark_error::{RedditError, RedditErrorKind, RedditResult};
use tracing::{debug, error, info, instrument};

/// Default User-Agent in Reddit's `platform:app:version` convention.
pub const DEFAULT_USER_AGENT: &str = "skylark:reddit-reader:v0.1 (by /u/skylark_bot)";

const ERROR_EXCERPT_LEN: usize = 500;

/// Build the listing path for a subreddit list.
///
/// Accepts comma- or plus-separated names; commas are normalized to `+`.
/// An empty value falls back to `all`.
///
/// # Examples
///
/// ```
/// use skylark_social::subreddit_endpoint;
///
/// assert_eq!(
///     subreddit_endpoint("technology,programming"),
///     "/r/technology+programming/hot.json?limit=50"
/// );
/// assert_eq!(subreddit_endpoint(""), "/r/all/hot.json?limit=50");
/// ```
pub fn subreddit_endpoint(subreddits: &str) -> String {
    let normalized = subreddits.trim().replace(',', "+");
    let subs = if normalized.is_empty() {
        "all"
    } else {
        normalized.as_str()
    };
    format!("/r/{}/hot.json?limit=50", subs)
}

/// Client for the public Reddit listing feed.
///
/// No authentication: the feed is read through `old.reddit.com`, which
/// serves JSON to non-browser clients far more reliably than the main
/// domain.
#[derive(Debug, Clone)]
pub struct RedditClient {
    client: reqwest::Client,
    user_agent: String,
}

impl RedditClient {
    /// Create a client with the given User-Agent.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: user_agent.into(),
        }
    }

    /// Fetch the hot listing for the configured subreddits.
    #[instrument(skip(self))]
    pub async fn fetch_hot(&self, subreddits: &str) -> RedditResult<RedditListing> {
        let endpoint = subreddit_endpoint(subreddits);
        let url = format!("https://old.reddit.com{}", endpoint);
        info!(url = %url, "fetching Reddit listing");

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json, text/plain, */*")
            .header("Accept-Language", "en-US,en;q=0.5")
            .header("Referer", "https://old.reddit.com/")
            .header("Sec-Fetch-Dest", "empty")
            .header("Sec-Fetch-Mode", "cors")
            .header("Sec-Fetch-Site", "same-origin")
            .header("DNT", "1")
            .send()
            .await
            .map_err(|e| RedditError::new(RedditErrorKind::Request(e.to_string())))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            let excerpt: String = body.trim().chars().take(ERROR_EXCERPT_LEN).collect();
            error!(status, error = %excerpt, "Reddit listing request failed");
            if status == 403 {
                error!(
                    "received 403 Forbidden from Reddit: the User-Agent or IP range is likely being flagged"
                );
            }
            return Err(RedditError::new(RedditErrorKind::Api {
                status,
                message: excerpt,
            }));
        }

        let listing = response
            .json::<RedditListing>()
            .await
            .map_err(|e| RedditError::new(RedditErrorKind::Parsing(e.to_string())))?;
        debug!(
            posts = listing.data().children().len(),
            "fetched Reddit listing"
        );
        Ok(listing)
    }
}

impl Default for RedditClient {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}
