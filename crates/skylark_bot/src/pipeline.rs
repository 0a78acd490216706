//! End-to-end reply pipeline: fetch, generate, publish, record.

use crate::config::BotConfig;
use crate::wiring::{bluesky_credentials, build_orchestrator};
use serde::{Deserialize, Serialize};
use skylark_core::GenerationRequest;
use skylark_error::SkylarkResult;
use skylark_models::FallbackOrchestrator;
use skylark_social::{
    BlueskyClient, PostData, RedditClient, RedditListing, TOP_POST_WINDOW, format_post_summary,
    link_card_for_post, select_trending_post, strip_reddit_urls,
};
use skylark_store::{NewPostedThread, PostedThreadStore};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Outcome of one bot cycle.
///
/// Serialized as the `POST /trigger` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunReport {
    /// A reply was published.
    Posted {
        /// Title of the source post
        title: String,
        /// Published reply text
        reply: String,
        /// Provider that produced the reply
        provider: String,
        /// AT URI of the created record
        uri: String,
    },
    /// A reply was generated but publishing was skipped.
    DryRun {
        /// Title of the source post
        title: String,
        /// Generated reply text
        reply: String,
        /// Provider that produced the reply
        provider: String,
    },
    /// No reply this cycle.
    Skipped {
        /// Why the cycle produced nothing
        reason: String,
    },
}

/// One fetch-generate-publish-record cycle.
///
/// Holds the long-lived pieces: the Reddit client, the fallback
/// orchestrator, and the posted-thread store. The Bluesky session is
/// established per cycle, right before publishing.
#[derive(Clone)]
pub struct BotPipeline {
    config: BotConfig,
    reddit: RedditClient,
    orchestrator: Arc<FallbackOrchestrator>,
    store: PostedThreadStore,
}

impl BotPipeline {
    /// Wire up a pipeline from configuration and environment credentials.
    pub fn new(config: BotConfig) -> SkylarkResult<Self> {
        let orchestrator = Arc::new(build_orchestrator(&config.llm)?);
        let reddit = RedditClient::new(config.reddit.user_agent.clone());
        let store = PostedThreadStore::new(&config.store.database_url)?;
        Ok(Self {
            config,
            reddit,
            orchestrator,
            store,
        })
    }

    /// Execute one full cycle.
    ///
    /// Fetches the hot listing, picks an unposted candidate, generates a
    /// reply through the fallback chain, publishes it with a link card,
    /// and records the thread. In dry-run mode the cycle stops after
    /// generation and reports the preview instead; the duplicate check is
    /// skipped too, since nothing gets recorded.
    #[instrument(skip(self))]
    pub async fn run_once(&self) -> SkylarkResult<RunReport> {
        let listing = self
            .reddit
            .fetch_hot(&self.config.reddit.subreddits)
            .await?;

        let Some(post) = self.select_candidate(&listing).await? else {
            info!("no eligible post this cycle");
            return Ok(RunReport::Skipped {
                reason: "no eligible trending post".to_string(),
            });
        };

        let summary = format_post_summary(&post);
        let permalink = format!("https://reddit.com{}", post.permalink());
        let request = GenerationRequest::new(summary, permalink);
        let reply = self.orchestrator.generate(&request).await?;

        let text = strip_reddit_urls(&reply.text);
        let card = link_card_for_post(&post);

        if self.config.dry_run {
            info!(
                title = %post.title(),
                provider = %reply.provider,
                reply = %text,
                "dry run, skipping publish"
            );
            return Ok(RunReport::DryRun {
                title: post.title().clone(),
                reply: text,
                provider: reply.provider.to_string(),
            });
        }

        let (handle, password) = bluesky_credentials()?;
        let bluesky =
            BlueskyClient::login(&self.config.bluesky.service, &handle, &password).await?;
        let receipt = bluesky.publish(&text, Some(&card)).await?;

        self.store
            .record(NewPostedThread::new(post.id().clone(), *post.score()))
            .await?;
        self.cleanup().await;

        info!(
            title = %post.title(),
            provider = %reply.provider,
            uri = %receipt.uri(),
            "reply published"
        );
        Ok(RunReport::Posted {
            title: post.title().clone(),
            reply: text,
            provider: reply.provider.to_string(),
            uri: receipt.uri().clone(),
        })
    }

    /// Pick an unposted trending post from the listing.
    ///
    /// The posted-thread lookup covers the whole candidate window in one
    /// query; dry-run skips it entirely.
    async fn select_candidate(&self, listing: &RedditListing) -> SkylarkResult<Option<PostData>> {
        if self.config.dry_run {
            return select_trending_post(listing, self.config.reddit.min_score, |_| Ok(false));
        }

        let ids: Vec<String> = listing
            .data()
            .children()
            .iter()
            .take(TOP_POST_WINDOW)
            .map(|post| post.data().id().clone())
            .collect();
        let posted: HashSet<String> = self
            .store
            .already_posted_among(ids)
            .await?
            .into_iter()
            .collect();

        select_trending_post(listing, self.config.reddit.min_score, |id| {
            Ok(posted.contains(id))
        })
    }

    /// Best-effort retention cleanup after a successful post.
    async fn cleanup(&self) {
        match self
            .store
            .cleanup_older_than(self.config.store.retention_days)
            .await
        {
            Ok(0) => {}
            Ok(removed) => info!(rows = removed, "pruned old posted-thread records"),
            Err(e) => warn!(error = %e, "retention cleanup failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posted_report_serializes_with_outcome_tag() {
        let report = RunReport::Posted {
            title: "Ferris spotted in the wild".to_string(),
            reply: "Nice find!".to_string(),
            provider: "groq".to_string(),
            uri: "at://did:plc:abc/app.bsky.feed.post/xyz".to_string(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"], "posted");
        assert_eq!(json["provider"], "groq");
        assert_eq!(json["reply"], "Nice find!");
    }

    #[test]
    fn skipped_report_carries_reason() {
        let report = RunReport::Skipped {
            reason: "no eligible trending post".to_string(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"], "skipped");
        assert_eq!(json["reason"], "no eligible trending post");
    }

    #[test]
    fn dry_run_report_round_trips() {
        let report = RunReport::DryRun {
            title: "Ferris spotted in the wild".to_string(),
            reply: "Nice find!".to_string(),
            provider: "gemini".to_string(),
        };
        let json = serde_json::to_string(&report).unwrap();
        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
