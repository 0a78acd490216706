//! Google Gemini API implementation.
//!
//! Talks to the `generateContent` REST endpoint directly. The envelope
//! differs from the chat-completions dialect (contents with parts, a
//! separate systemInstruction), so this client does not reuse
//! [`crate::OpenAICompatibleClient`].

use crate::openai_compat::body_excerpt;
use crate::prompt;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use skylark_core::{GenerationRequest, ProviderId, ReplyDriver};
use skylark_error::{ProviderError, ProviderErrorKind, ProviderResult};
use tracing::{debug, instrument};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";

fn endpoint_url(model: &str) -> String {
    format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
        model
    )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Instruction<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct Instruction<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Configuration for the Gemini client.
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key for generativelanguage.googleapis.com
    api_key: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
}

/// Google Gemini REST API client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a new Gemini client from an explicit configuration.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: GeminiConfig) -> Self {
        let GeminiConfig { api_key, model } = config;
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    fn extract_text(response: GenerateContentResponse) -> Option<String> {
        let candidate = response.candidates.into_iter().next()?;
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

#[async_trait]
impl ReplyDriver for GeminiClient {
    #[instrument(skip(self, req), fields(provider = "gemini", model = %self.model))]
    async fn generate(&self, req: &GenerationRequest) -> ProviderResult<String> {
        let user = prompt::user_prompt(req);
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart { text: &user }],
            }],
            system_instruction: Instruction {
                parts: vec![TextPart {
                    text: prompt::SYSTEM_PROMPT,
                }],
            },
        };

        let response = self
            .client
            .post(endpoint_url(&self.model))
            .header("x-goog-api-key", &self.api_key)
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

        let parsed: GenerateContentResponse = serde_json::from_str(&body_text)
            .map_err(|e| ProviderError::new(ProviderErrorKind::ResponseParsing(e.to_string())))?;

        let text = Self::extract_text(parsed)
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyCompletion))?;

        debug!(chars = text.len(), "completion received");
        Ok(text)
    }

    fn provider_id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
