//! Assembles the fallback orchestrator from configuration and environment
//! credentials.

use crate::config::LlmConfig;
use skylark_core::{ProviderId, ReplyDriver, resolve};
use skylark_error::{ConfigError, SkylarkResult};
use skylark_models::{
    CloudflareConfigBuilder, CloudflareDriver, FallbackOrchestrator, GeminiClient,
    GeminiConfigBuilder, GroqConfigBuilder, GroqDriver,
};
use std::sync::Arc;
use tracing::warn;

/// Environment variable holding the Cloudflare account id.
pub const CLOUDFLARE_ACCOUNT_ID: &str = "CLOUDFLARE_ACCOUNT_ID";
/// Environment variable holding the Cloudflare Workers AI token.
pub const CLOUDFLARE_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
/// Environment variable holding the Groq API key.
pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
/// Environment variable holding the Bluesky handle.
pub const BLUESKY_HANDLE: &str = "BLUESKY_HANDLE";
/// Environment variable holding the Bluesky app password.
pub const BLUESKY_PASSWORD: &str = "BLUESKY_PASSWORD";

/// Build the fallback orchestrator from the `[llm]` settings and
/// environment credentials.
///
/// The configured priority decides the attempt order. A provider whose
/// credentials are not set is dropped from the effective order with a
/// warning; the build fails only when none remain.
pub fn build_orchestrator(llm: &LlmConfig) -> SkylarkResult<FallbackOrchestrator> {
    let priority = resolve(llm.provider_priority.as_deref(), llm.provider.as_deref());

    let mut builder = FallbackOrchestrator::builder().priority(priority.clone());
    for provider in priority {
        if let Some(driver) = driver_for(provider, llm)? {
            builder = builder.register(driver);
        }
    }
    builder.build().map_err(Into::into)
}

/// Read the Bluesky credentials from the environment.
pub fn bluesky_credentials() -> SkylarkResult<(String, String)> {
    let handle = required_env(BLUESKY_HANDLE)?;
    let password = required_env(BLUESKY_PASSWORD)?;
    Ok((handle, password))
}

fn driver_for(
    provider: ProviderId,
    llm: &LlmConfig,
) -> SkylarkResult<Option<Arc<dyn ReplyDriver>>> {
    match provider {
        ProviderId::Cloudflare => {
            let Some(account_id) = credential(CLOUDFLARE_ACCOUNT_ID, provider) else {
                return Ok(None);
            };
            let Some(api_token) = credential(CLOUDFLARE_API_TOKEN, provider) else {
                return Ok(None);
            };
            let mut builder = CloudflareConfigBuilder::default();
            builder.account_id(account_id).api_token(api_token);
            if let Some(model) = &llm.cloudflare_model {
                builder.model(model);
            }
            let config = builder
                .build()
                .map_err(|e| ConfigError::new(e.to_string()))?;
            Ok(Some(Arc::new(CloudflareDriver::new(config))))
        }
        ProviderId::Groq => {
            let Some(api_key) = credential(GROQ_API_KEY, provider) else {
                return Ok(None);
            };
            let mut builder = GroqConfigBuilder::default();
            builder.api_key(api_key);
            if let Some(model) = &llm.groq_model {
                builder.model(model);
            }
            let config = builder
                .build()
                .map_err(|e| ConfigError::new(e.to_string()))?;
            Ok(Some(Arc::new(GroqDriver::new(config))))
        }
        ProviderId::Gemini => {
            let Some(api_key) = credential(GEMINI_API_KEY, provider) else {
                return Ok(None);
            };
            let mut builder = GeminiConfigBuilder::default();
            builder.api_key(api_key);
            if let Some(model) = &llm.gemini_model {
                builder.model(model);
            }
            let config = builder
                .build()
                .map_err(|e| ConfigError::new(e.to_string()))?;
            Ok(Some(Arc::new(GeminiClient::new(config))))
        }
    }
}

fn credential(name: &str, provider: ProviderId) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            warn!(
                provider = %provider,
                variable = name,
                "credential not set, dropping provider"
            );
            None
        }
    }
}

fn required_env(name: &str) -> SkylarkResult<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            ConfigError::new(format!("{} environment variable not set", name)).into()
        })
}
