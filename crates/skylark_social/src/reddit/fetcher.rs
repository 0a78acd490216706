//! Trending-post selection and formatting.

use crate::reddit::json_models::{PostData, RedditListing};
use rand::seq::SliceRandom;
use skylark_core::LinkCard;
use skylark_error::SkylarkResult;
use tracing::{debug, info, warn};

/// How many listing entries are considered per run.
pub const TOP_POST_WINDOW: usize = 10;
/// Posts with shorter titles are skipped.
pub const MIN_TITLE_LEN: usize = 10;

const SELFTEXT_LIMIT: usize = 2000;
const CARD_DESCRIPTION_LIMIT: usize = 150;

/// Pick a random eligible post from the top of the listing.
///
/// A post qualifies when its score reaches `min_score`, its title has at
/// least [`MIN_TITLE_LEN`] characters, and `already_posted` returns false
/// for its id. Returns `None` when nothing in the window qualifies, which
/// the pipeline reports as a skipped run.
pub fn select_trending_post<F>(
    listing: &RedditListing,
    min_score: i64,
    mut already_posted: F,
) -> SkylarkResult<Option<PostData>>
where
    F: FnMut(&str) -> SkylarkResult<bool>,
{
    let window = listing
        .data()
        .children()
        .iter()
        .take(TOP_POST_WINDOW)
        .map(|entry| entry.data());
    let mut candidates: Vec<&PostData> = Vec::new();

    for post in window {
        if *post.score() < min_score {
            debug!(id = %post.id(), score = post.score(), "score below threshold");
            continue;
        }
        if post.title().chars().count() < MIN_TITLE_LEN {
            debug!(id = %post.id(), "title too short");
            continue;
        }
        if already_posted(post.id())? {
            debug!(id = %post.id(), "already posted");
            continue;
        }
        candidates.push(post);
    }

    if candidates.is_empty() {
        warn!("no suitable posts found in the listing window");
        return Ok(None);
    }

    let Some(selected) = candidates.choose(&mut rand::thread_rng()) else {
        return Ok(None);
    };
    info!(
        id = %selected.id(),
        score = selected.score(),
        candidates = candidates.len(),
        "selected trending post"
    );
    Ok(Some((*selected).clone()))
}

/// Format a post as the text block handed to reply generation.
///
/// Title, subreddit, score, author, and the full permalink, followed by
/// the self-post body if present. Long bodies are cut at
/// 2000 characters with a truncation marker so prompts stay bounded.
pub fn format_post_summary(post: &PostData) -> String {
    let mut content = format!(
        "Title: {}\nSubreddit: r/{}\nScore: {}\nAuthor: u/{}\nURL: https://reddit.com{}\n\n",
        post.title(),
        post.subreddit(),
        post.score(),
        post.author(),
        post.permalink()
    );

    let selftext = post.selftext();
    if !selftext.is_empty() {
        let body: String = selftext.chars().take(SELFTEXT_LIMIT).collect();
        content.push_str("Content:\n");
        content.push_str(&body);
        content.push('\n');
        if selftext.chars().count() > SELFTEXT_LIMIT {
            content.push_str("\n[Content truncated...]\n");
        }
    }

    content
}

/// Build the link card for a selected post.
///
/// The description is the self-post body cut to 150 characters, or a
/// `Reddit post in r/<sub> by u/<author>` line for link posts. The
/// thumbnail is kept only when the listing value is a real URL; Reddit
/// uses keywords like `self` and `default` as placeholders there.
pub fn link_card_for_post(post: &PostData) -> LinkCard {
    let selftext = post.selftext();
    let description = if selftext.is_empty() {
        format!(
            "Reddit post in r/{} by u/{}",
            post.subreddit(),
            post.author()
        )
    } else if selftext.chars().count() > CARD_DESCRIPTION_LIMIT {
        let head: String = selftext.chars().take(CARD_DESCRIPTION_LIMIT - 3).collect();
        format!("{}...", head)
    } else {
        selftext.to_string()
    };

    let thumb_url = post
        .thumbnail()
        .as_ref()
        .filter(|t| t.starts_with("http"))
        .cloned();

    LinkCard::new(
        format!("https://reddit.com{}", post.permalink()),
        post.title().clone(),
        description,
        thumb_url,
    )
}
