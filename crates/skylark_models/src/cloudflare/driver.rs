//! Cloudflare Workers AI driver using the OpenAI-compatible client.
//!
//! Workers AI exposes an OpenAI-compatible chat-completions endpoint
//! scoped to the account id, so this driver only assembles the URL and
//! delegates everything else.

use crate::openai_compat::OpenAICompatibleClient;
use crate::prompt;
use async_trait::async_trait;
use skylark_core::{GenerationRequest, ProviderId, ReplyDriver};
use skylark_error::ProviderResult;
use tracing::instrument;

const DEFAULT_MODEL: &str = "@cf/meta/llama-3.1-8b-instruct";

fn endpoint_url(account_id: &str) -> String {
    format!(
        "https://api.cloudflare.com/client/v4/accounts/{}/ai/v1/chat/completions",
        account_id
    )
}

/// Configuration for the Cloudflare Workers AI driver.
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct CloudflareConfig {
    /// Cloudflare account id the Workers AI endpoint is scoped to
    account_id: String,
    /// API token with Workers AI access
    api_token: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
}

/// Cloudflare Workers AI driver.
#[derive(Debug, Clone)]
pub struct CloudflareDriver {
    inner: OpenAICompatibleClient,
}

impl CloudflareDriver {
    /// Creates a new Workers AI driver from an explicit configuration.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: CloudflareConfig) -> Self {
        let CloudflareConfig {
            account_id,
            api_token,
            model,
        } = config;
        let inner = OpenAICompatibleClient::new(
            api_token,
            model,
            endpoint_url(&account_id),
            "cloudflare",
        );
        Self { inner }
    }
}

#[async_trait]
impl ReplyDriver for CloudflareDriver {
    #[instrument(skip(self, req), fields(provider = "cloudflare", model = %self.inner.model_name()))]
    async fn generate(&self, req: &GenerationRequest) -> ProviderResult<String> {
        self.inner
            .generate(prompt::SYSTEM_PROMPT, &prompt::user_prompt(req))
            .await
    }

    fn provider_id(&self) -> ProviderId {
        ProviderId::Cloudflare
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
