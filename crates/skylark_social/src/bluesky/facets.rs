//! Link facet detection for post text.

use crate::bluesky::json_models::{ByteSlice, Facet, LinkFeature};
use regex::Regex;
use std::sync::OnceLock;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn url_regex() -> &'static Regex {
    URL_PATTERN.get_or_init(|| Regex::new(r"https?://[^\s]+").expect("valid URL regex"))
}

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '\'', '"'];

/// Detect link facets over the final outbound text.
///
/// Offsets are UTF-8 byte positions, which is what `app.bsky.feed.post`
/// records address. Trailing punctuation is not treated as part of the
/// link.
///
/// # Examples
///
/// ```
/// use skylark_social::detect_link_facets;
///
/// let facets = detect_link_facets("docs: https://doc.rust-lang.org/book/.");
/// assert_eq!(facets.len(), 1);
/// assert_eq!(*facets[0].index().byte_start(), 6);
/// ```
pub fn detect_link_facets(text: &str) -> Vec<Facet> {
    let mut facets = Vec::new();
    for m in url_regex().find_iter(text) {
        let mut url = m.as_str();
        while let Some(last) = url.chars().last() {
            if TRAILING_PUNCTUATION.contains(&last) {
                url = &url[..url.len() - last.len_utf8()];
            } else {
                break;
            }
        }
        if url == "http://" || url == "https://" {
            continue;
        }
        facets.push(Facet::new(
            ByteSlice::new(m.start(), m.start() + url.len()),
            vec![LinkFeature::new(url)],
        ));
    }
    facets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_single_link() {
        let text = "look at https://example.com/page now";
        let facets = detect_link_facets(text);
        assert_eq!(facets.len(), 1);
        assert_eq!(*facets[0].index().byte_start(), 8);
        assert_eq!(*facets[0].index().byte_end(), 8 + "https://example.com/page".len());
        assert_eq!(facets[0].features()[0].uri(), "https://example.com/page");
    }

    #[test]
    fn offsets_are_bytes_not_chars() {
        // The crab emoji is 4 bytes in UTF-8 but one char.
        let text = "\u{1f980} https://example.com";
        let facets = detect_link_facets(text);
        assert_eq!(facets.len(), 1);
        assert_eq!(*facets[0].index().byte_start(), 5);
    }

    #[test]
    fn trims_trailing_punctuation() {
        let facets = detect_link_facets("read https://example.com/docs.");
        assert_eq!(facets[0].features()[0].uri(), "https://example.com/docs");
        assert_eq!(
            *facets[0].index().byte_end(),
            5 + "https://example.com/docs".len()
        );
    }

    #[test]
    fn finds_multiple_links() {
        let text = "https://a.example/one and https://b.example/two";
        let facets = detect_link_facets(text);
        assert_eq!(facets.len(), 2);
        assert_eq!(facets[1].features()[0].uri(), "https://b.example/two");
    }

    #[test]
    fn plain_text_has_no_facets() {
        assert!(detect_link_facets("nothing to see here").is_empty());
    }

    #[test]
    fn bare_scheme_is_skipped() {
        assert!(detect_link_facets("broken link: https://.").is_empty());
    }
}
