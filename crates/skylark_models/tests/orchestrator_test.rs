// Fallback orchestrator behavior tests.
//
// These tests exercise the priority walk with scripted drivers, so every
// fallback path runs fast and deterministically with no real API calls.

mod test_utils;

use skylark_core::{DEFAULT_PRIORITY, ProviderId};
use skylark_error::{
    AttemptFailure, OrchestratorErrorKind, ProviderErrorKind, SkylarkError, SkylarkErrorKind,
};
use skylark_models::FallbackOrchestrator;
use test_utils::{ScriptedDriver, trending_post_request};

fn expect_aggregate(err: &SkylarkError) -> &[AttemptFailure] {
    match err.kind() {
        SkylarkErrorKind::Orchestrator(orch) => match &orch.kind {
            OrchestratorErrorKind::AllProvidersFailed(failures) => failures,
            other => panic!("expected AllProvidersFailed, got {other}"),
        },
        other => panic!("expected orchestrator error, got {other}"),
    }
}

#[tokio::test]
async fn test_walks_providers_in_configured_order() {
    let gemini = ScriptedDriver::rate_limited(ProviderId::Gemini);
    let cloudflare = ScriptedDriver::rate_limited(ProviderId::Cloudflare);
    let groq = ScriptedDriver::rate_limited(ProviderId::Groq);

    let orchestrator = FallbackOrchestrator::builder()
        .register(gemini.clone())
        .register(cloudflare.clone())
        .register(groq.clone())
        .priority(vec![
            ProviderId::Gemini,
            ProviderId::Cloudflare,
            ProviderId::Groq,
        ])
        .build()
        .unwrap();

    let err = orchestrator
        .generate(&trending_post_request())
        .await
        .unwrap_err();
    let failures = expect_aggregate(&err);

    let order: Vec<&str> = failures.iter().map(|f| f.provider.as_str()).collect();
    assert_eq!(order, vec!["gemini", "cloudflare", "groq"]);
    assert_eq!(gemini.call_count(), 1);
    assert_eq!(cloudflare.call_count(), 1);
    assert_eq!(groq.call_count(), 1);
}

#[tokio::test]
async fn test_default_priority_when_unset() -> anyhow::Result<()> {
    let cloudflare = ScriptedDriver::succeeds(ProviderId::Cloudflare, "first in line");
    let groq = ScriptedDriver::succeeds(ProviderId::Groq, "never reached");
    let gemini = ScriptedDriver::succeeds(ProviderId::Gemini, "never reached");

    let orchestrator = FallbackOrchestrator::builder()
        .register(groq.clone())
        .register(gemini.clone())
        .register(cloudflare.clone())
        .build()?;

    assert_eq!(orchestrator.priority(), DEFAULT_PRIORITY);

    let reply = orchestrator.generate(&trending_post_request()).await?;
    assert_eq!(reply.provider, ProviderId::Cloudflare);
    assert_eq!(reply.text, "first in line");
    Ok(())
}

#[tokio::test]
async fn test_first_success_stops_walk() -> anyhow::Result<()> {
    let cloudflare = ScriptedDriver::succeeds(ProviderId::Cloudflare, "done on the first try");
    let groq = ScriptedDriver::succeeds(ProviderId::Groq, "unused");
    let gemini = ScriptedDriver::succeeds(ProviderId::Gemini, "unused");

    let orchestrator = FallbackOrchestrator::builder()
        .register(cloudflare.clone())
        .register(groq.clone())
        .register(gemini.clone())
        .build()?;

    let reply = orchestrator.generate(&trending_post_request()).await?;
    assert_eq!(reply.provider, ProviderId::Cloudflare);
    assert_eq!(cloudflare.call_count(), 1);
    assert_eq!(groq.call_count(), 0);
    assert_eq!(gemini.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_rate_limited_falls_back_to_next() -> anyhow::Result<()> {
    let cloudflare = ScriptedDriver::rate_limited(ProviderId::Cloudflare);
    let groq = ScriptedDriver::succeeds(ProviderId::Groq, "Nice find!");
    let gemini = ScriptedDriver::succeeds(ProviderId::Gemini, "unused");

    let orchestrator = FallbackOrchestrator::builder()
        .register(cloudflare.clone())
        .register(groq.clone())
        .register(gemini.clone())
        .build()?;

    let reply = orchestrator.generate(&trending_post_request()).await?;
    assert_eq!(reply.text, "Nice find!");
    assert_eq!(reply.provider, ProviderId::Groq);
    assert_eq!(cloudflare.call_count(), 1);
    assert_eq!(groq.call_count(), 1);
    assert_eq!(gemini.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_success_after_two_rate_limits() -> anyhow::Result<()> {
    let cloudflare = ScriptedDriver::rate_limited(ProviderId::Cloudflare);
    let groq = ScriptedDriver::rate_limited(ProviderId::Groq);
    let gemini = ScriptedDriver::succeeds(ProviderId::Gemini, "third time lucky");

    let orchestrator = FallbackOrchestrator::builder()
        .register(cloudflare.clone())
        .register(groq.clone())
        .register(gemini.clone())
        .build()?;

    let reply = orchestrator.generate(&trending_post_request()).await?;
    assert_eq!(reply.provider, ProviderId::Gemini);
    assert_eq!(reply.text, "third time lucky");
    assert_eq!(cloudflare.call_count(), 1);
    assert_eq!(groq.call_count(), 1);
    assert_eq!(gemini.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_non_rate_limit_error_aborts_run() {
    let cloudflare = ScriptedDriver::fails(
        ProviderId::Cloudflare,
        ProviderErrorKind::from_status(500, "Internal Server Error"),
    );
    let groq = ScriptedDriver::succeeds(ProviderId::Groq, "unreached");
    let gemini = ScriptedDriver::succeeds(ProviderId::Gemini, "unreached");

    let orchestrator = FallbackOrchestrator::builder()
        .register(cloudflare.clone())
        .register(groq.clone())
        .register(gemini.clone())
        .build()
        .unwrap();

    let err = orchestrator
        .generate(&trending_post_request())
        .await
        .unwrap_err();
    let failures = expect_aggregate(&err);

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].provider, "cloudflare");
    assert!(!failures[0].rate_limited);
    assert_eq!(groq.call_count(), 0);
    assert_eq!(gemini.call_count(), 0);
}

#[tokio::test]
async fn test_all_rate_limited_aggregates_failures() {
    let cloudflare = ScriptedDriver::fails(
        ProviderId::Cloudflare,
        ProviderErrorKind::from_status(429, "cf says slow down"),
    );
    let groq = ScriptedDriver::fails(
        ProviderId::Groq,
        ProviderErrorKind::from_status(429, "groq says slow down"),
    );
    let gemini = ScriptedDriver::fails(
        ProviderId::Gemini,
        ProviderErrorKind::from_status(429, "gemini says slow down"),
    );

    let orchestrator = FallbackOrchestrator::builder()
        .register(cloudflare.clone())
        .register(groq.clone())
        .register(gemini.clone())
        .build()
        .unwrap();

    let err = orchestrator
        .generate(&trending_post_request())
        .await
        .unwrap_err();
    let failures = expect_aggregate(&err);
    assert_eq!(failures.len(), 3);
    assert!(failures.iter().all(|f| f.rate_limited));

    let message = err.to_string();
    assert!(message.contains("All providers failed"));
    assert!(message.contains("cloudflare: Rate limited (HTTP 429): cf says slow down"));
    assert!(message.contains("groq: Rate limited (HTTP 429): groq says slow down"));
    assert!(message.contains("gemini: Rate limited (HTTP 429): gemini says slow down"));
    assert_eq!(message.matches("; ").count(), 2);
    let cf_at = message.find("cloudflare:").unwrap();
    let groq_at = message.find("groq:").unwrap();
    let gemini_at = message.find("gemini:").unwrap();
    assert!(cf_at < groq_at && groq_at < gemini_at);
}

#[tokio::test]
async fn test_duplicate_priority_entries_invoke_once() {
    let groq = ScriptedDriver::rate_limited(ProviderId::Groq);
    let gemini = ScriptedDriver::rate_limited(ProviderId::Gemini);

    let orchestrator = FallbackOrchestrator::builder()
        .register(groq.clone())
        .register(gemini.clone())
        .priority(vec![ProviderId::Groq, ProviderId::Groq, ProviderId::Gemini])
        .build()
        .unwrap();

    let err = orchestrator
        .generate(&trending_post_request())
        .await
        .unwrap_err();
    let failures = expect_aggregate(&err);
    assert_eq!(failures.len(), 2);
    assert_eq!(groq.call_count(), 1);
    assert_eq!(gemini.call_count(), 1);
}

#[tokio::test]
async fn test_reply_text_is_tidied() -> anyhow::Result<()> {
    let groq = ScriptedDriver::succeeds(ProviderId::Groq, "  \"Nice find!\"  ");

    let orchestrator = FallbackOrchestrator::builder()
        .register(groq.clone())
        .priority(vec![ProviderId::Groq])
        .build()?;

    let reply = orchestrator.generate(&trending_post_request()).await?;
    assert_eq!(reply.text, "Nice find!");
    Ok(())
}

#[tokio::test]
async fn test_transport_429_classifies_as_rate_limited() -> anyhow::Result<()> {
    let cloudflare = ScriptedDriver::fails(
        ProviderId::Cloudflare,
        ProviderErrorKind::Request("error sending request: status 429".to_string()),
    );
    let groq = ScriptedDriver::succeeds(ProviderId::Groq, "still here");

    let orchestrator = FallbackOrchestrator::builder()
        .register(cloudflare.clone())
        .register(groq.clone())
        .priority(vec![ProviderId::Cloudflare, ProviderId::Groq])
        .build()?;

    let reply = orchestrator.generate(&trending_post_request()).await?;
    assert_eq!(reply.provider, ProviderId::Groq);
    Ok(())
}

#[tokio::test]
async fn test_rate_limit_phrase_classifies() -> anyhow::Result<()> {
    let cloudflare = ScriptedDriver::fails(
        ProviderId::Cloudflare,
        ProviderErrorKind::Http {
            status: 503,
            message: "Rate limit exceeded for model".to_string(),
        },
    );
    let groq = ScriptedDriver::succeeds(ProviderId::Groq, "fell through");

    let orchestrator = FallbackOrchestrator::builder()
        .register(cloudflare.clone())
        .register(groq.clone())
        .priority(vec![ProviderId::Cloudflare, ProviderId::Groq])
        .build()?;

    let reply = orchestrator.generate(&trending_post_request()).await?;
    assert_eq!(reply.provider, ProviderId::Groq);
    assert_eq!(cloudflare.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_mixed_failures_stop_at_first_hard_error() {
    let cloudflare = ScriptedDriver::rate_limited(ProviderId::Cloudflare);
    let groq = ScriptedDriver::fails(
        ProviderId::Groq,
        ProviderErrorKind::from_status(500, "Internal Server Error"),
    );
    let gemini = ScriptedDriver::succeeds(ProviderId::Gemini, "unreached");

    let orchestrator = FallbackOrchestrator::builder()
        .register(cloudflare.clone())
        .register(groq.clone())
        .register(gemini.clone())
        .build()
        .unwrap();

    let err = orchestrator
        .generate(&trending_post_request())
        .await
        .unwrap_err();
    let failures = expect_aggregate(&err);

    assert_eq!(failures.len(), 2);
    assert!(failures[0].rate_limited);
    assert!(!failures[1].rate_limited);
    assert_eq!(failures[1].provider, "groq");
    assert_eq!(gemini.call_count(), 0);
}

#[tokio::test]
async fn test_missing_credential_aborts() {
    let cloudflare = ScriptedDriver::fails(
        ProviderId::Cloudflare,
        ProviderErrorKind::MissingCredential("CLOUDFLARE_API_TOKEN".to_string()),
    );
    let groq = ScriptedDriver::succeeds(ProviderId::Groq, "unreached");

    let orchestrator = FallbackOrchestrator::builder()
        .register(cloudflare.clone())
        .register(groq.clone())
        .priority(vec![ProviderId::Cloudflare, ProviderId::Groq])
        .build()
        .unwrap();

    let err = orchestrator
        .generate(&trending_post_request())
        .await
        .unwrap_err();
    let failures = expect_aggregate(&err);
    assert_eq!(failures.len(), 1);
    assert!(failures[0].message.contains("CLOUDFLARE_API_TOKEN"));
    assert_eq!(groq.call_count(), 0);
}

#[tokio::test]
async fn test_last_provider_rate_limited_still_aggregates() {
    let groq = ScriptedDriver::rate_limited(ProviderId::Groq);

    let orchestrator = FallbackOrchestrator::builder()
        .register(groq.clone())
        .priority(vec![ProviderId::Groq])
        .build()
        .unwrap();

    let err = orchestrator
        .generate(&trending_post_request())
        .await
        .unwrap_err();
    let failures = expect_aggregate(&err);
    assert_eq!(failures.len(), 1);
    assert!(failures[0].rate_limited);
    assert_eq!(groq.call_count(), 1);
}
