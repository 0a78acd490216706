//! Prompt construction and reply cleanup shared by all adapters.

use skylark_core::GenerationRequest;

/// Persona instruction sent as the system message to every backend.
pub const SYSTEM_PROMPT: &str = "You are a curious, friendly person sharing interesting things you \
found online. Write a single short comment (under 250 characters) reacting to the post you are \
given. Sound like a real person: casual, specific, sometimes a little wry. Do not use hashtags, \
do not include links or URLs, do not address the post author directly, and do not wrap your \
comment in quotation marks.";

/// Build the user message for a generation request.
pub fn user_prompt(req: &GenerationRequest) -> String {
    format!(
        "Here is a trending Reddit post:\n\n{}\nWrite your comment about it.",
        req.content
    )
}

/// Clean up a raw completion: trim whitespace and strip one layer of
/// wrapping quotes, which chat models add despite instructions.
pub fn tidy_reply(raw: &str) -> String {
    let trimmed = raw.trim();
    for (open, close) in [('"', '"'), ('\u{201c}', '\u{201d}')] {
        if trimmed.len() >= 2 && trimmed.starts_with(open) && trimmed.ends_with(close) {
            return trimmed[open.len_utf8()..trimmed.len() - close.len_utf8()]
                .trim()
                .to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_post_content() {
        let req = GenerationRequest::new("Title: Ferris spotted\nScore: 512\n", "https://x/");
        let prompt = user_prompt(&req);
        assert!(prompt.contains("Title: Ferris spotted"));
        assert!(prompt.starts_with("Here is a trending Reddit post:"));
    }

    #[test]
    fn tidy_trims_whitespace() {
        assert_eq!(tidy_reply("  neat project!  \n"), "neat project!");
    }

    #[test]
    fn tidy_strips_wrapping_double_quotes() {
        assert_eq!(tidy_reply("\"neat project!\""), "neat project!");
    }

    #[test]
    fn tidy_strips_curly_quotes() {
        assert_eq!(tidy_reply("\u{201c}neat project!\u{201d}"), "neat project!");
    }

    #[test]
    fn tidy_keeps_interior_quotes() {
        assert_eq!(
            tidy_reply("they said \"wow\" and meant it"),
            "they said \"wow\" and meant it"
        );
    }

    #[test]
    fn tidy_handles_lone_quote() {
        assert_eq!(tidy_reply("\""), "\"");
    }
}
