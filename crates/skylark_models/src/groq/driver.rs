//! Groq AI LPU Inference API driver using the OpenAI-compatible client.

use crate::openai_compat::OpenAICompatibleClient;
use crate::prompt;
use async_trait::async_trait;
use skylark_core::{GenerationRequest, ProviderId, ReplyDriver};
use skylark_error::ProviderResult;
use tracing::instrument;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Configuration for the Groq driver.
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GroqConfig {
    /// API key for api.groq.com
    api_key: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
}

/// Groq AI LPU Inference API driver.
#[derive(Debug, Clone)]
pub struct GroqDriver {
    inner: OpenAICompatibleClient,
}

impl GroqDriver {
    /// Creates a new Groq driver from an explicit configuration.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: GroqConfig) -> Self {
        let GroqConfig { api_key, model } = config;
        let inner =
            OpenAICompatibleClient::new(api_key, model, GROQ_API_URL.to_string(), "groq");
        Self { inner }
    }
}

#[async_trait]
impl ReplyDriver for GroqDriver {
    #[instrument(skip(self, req), fields(provider = "groq", model = %self.inner.model_name()))]
    async fn generate(&self, req: &GenerationRequest) -> ProviderResult<String> {
        self.inner
            .generate(prompt::SYSTEM_PROMPT, &prompt::user_prompt(req))
            .await
    }

    fn provider_id(&self) -> ProviderId {
        ProviderId::Groq
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_model() {
        let config = GroqConfigBuilder::default()
            .api_key("gsk-test")
            .build()
            .unwrap();
        assert_eq!(config.model(), DEFAULT_MODEL);
    }

    #[test]
    fn driver_reports_identity() {
        let config = GroqConfigBuilder::default()
            .api_key("gsk-test")
            .model("llama-3.1-8b-instant")
            .build()
            .unwrap();
        let driver = GroqDriver::new(config);
        assert_eq!(driver.provider_id(), ProviderId::Groq);
        assert_eq!(driver.model_name(), "llama-3.1-8b-instant");
    }
}
