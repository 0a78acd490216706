//! Outbound text cleanup.

use regex::Regex;
use std::sync::OnceLock;

static REDDIT_URL: OnceLock<Regex> = OnceLock::new();

fn reddit_url_regex() -> &'static Regex {
    REDDIT_URL.get_or_init(|| {
        // reddit.com on any subdomain, plus redd.it short links
        Regex::new(r"(?i)https?://(?:[a-z0-9-]+\.)?reddit\.com/\S*|https?://redd\.it/\S*")
            .expect("valid Reddit URL regex")
    })
}

/// Remove Reddit URLs from outgoing text and trim the result.
///
/// Generated replies occasionally quote the source link despite the prompt
/// instructions; the link card already points at the thread, so the text
/// itself should not.
///
/// # Examples
///
/// ```
/// use skylark_social::strip_reddit_urls;
///
/// let cleaned = strip_reddit_urls("wild thread https://reddit.com/r/rust/comments/abc/x/");
/// assert_eq!(cleaned, "wild thread");
/// ```
pub fn strip_reddit_urls(text: &str) -> String {
    reddit_url_regex().replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_reddit_link() {
        assert_eq!(
            strip_reddit_urls("look at this https://reddit.com/r/rust/comments/abc123/ferris/"),
            "look at this"
        );
    }

    #[test]
    fn strips_subdomain_links() {
        assert_eq!(
            strip_reddit_urls("via https://old.reddit.com/r/rust/ neat"),
            "via  neat"
        );
    }

    #[test]
    fn strips_short_links() {
        assert_eq!(strip_reddit_urls("see https://redd.it/abc123 now"), "see  now");
    }

    #[test]
    fn strips_case_insensitively() {
        assert_eq!(strip_reddit_urls("HTTPS://REDDIT.COM/r/rust/ wow"), "wow");
    }

    #[test]
    fn keeps_other_urls() {
        let text = "docs at https://doc.rust-lang.org/book/";
        assert_eq!(strip_reddit_urls(text), text);
    }

    #[test]
    fn strips_multiple_occurrences() {
        assert_eq!(
            strip_reddit_urls("https://reddit.com/a and https://redd.it/b"),
            "and"
        );
    }

    #[test]
    fn trims_result() {
        assert_eq!(strip_reddit_urls("  spaced out  "), "spaced out");
    }

    #[test]
    fn leaves_bare_domain_alone() {
        let text = "someone said reddit.com is down";
        assert_eq!(strip_reddit_urls(text), text);
    }
}
