//! Shared client for OpenAI-compatible chat-completions endpoints.
//!
//! Groq and Cloudflare Workers AI both speak the same chat-completions
//! dialect, so their drivers wrap this client and differ only in endpoint
//! URL, credentials, and default model.

use serde::{Deserialize, Serialize};
use skylark_error::{ProviderError, ProviderErrorKind, ProviderResult};
use tracing::{debug, instrument};

const TEMPERATURE: f32 = 0.8;
const MAX_TOKENS: u32 = 256;

/// Longest slice of an error body carried into error messages.
const BODY_EXCERPT_LEN: usize = 300;

pub(crate) fn body_excerpt(body: &str) -> String {
    body.trim().chars().take(BODY_EXCERPT_LEN).collect()
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for OpenAI-compatible chat-completions APIs.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
    provider: &'static str,
}

impl OpenAICompatibleClient {
    /// Creates a new client for the given endpoint.
    pub fn new(api_key: String, model: String, url: String, provider: &'static str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            url,
            provider,
        }
    }

    /// Provider label this client was created for.
    pub fn provider_name(&self) -> &'static str {
        self.provider
    }

    /// Model identifier sent with each request.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Run one chat completion and return the first choice's content.
    #[instrument(skip(self, system, user), fields(provider = self.provider, model = %self.model))]
    pub async fn generate(&self, system: &str, user: &str) -> ProviderResult<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::Request(e.to_string())))?;

        let status = response.status().as_u16();
        let body_text = response
            .text()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::Request(e.to_string())))?;

        if !(200..300).contains(&status) {
            return Err(ProviderError::new(ProviderErrorKind::from_status(
                status,
                body_excerpt(&body_text),
            )));
        }

        let parsed: ChatResponse = serde_json::from_str(&body_text)
            .map_err(|e| ProviderError::new(ProviderErrorKind::ResponseParsing(e.to_string())))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyCompletion))?;

        debug!(chars = content.len(), "completion received");
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_envelope_shape() {
        let body = ChatRequest {
            model: "llama-3.3-70b-versatile",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "be brief",
                },
                ChatMessage {
                    role: "user",
                    content: "hello",
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama-3.3-70b-versatile");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
        assert_eq!(json["max_tokens"], 256);
    }

    #[test]
    fn response_content_parses() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"Nice find!"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Nice find!")
        );
    }

    #[test]
    fn response_without_content_parses_to_none() {
        let raw = r#"{"choices":[{"message":{"role":"assistant"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }

    #[test]
    fn excerpt_trims_and_bounds_body() {
        let long = format!("  {}  ", "x".repeat(400));
        let excerpt = body_excerpt(&long);
        assert_eq!(excerpt.len(), BODY_EXCERPT_LEN);
        assert!(!excerpt.starts_with(' '));
    }
}
