//! Configuration loading from TOML files.

use anyhow::Result;
use skylark_bot::BotConfig;

#[test]
fn test_from_file_overrides_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("skylark.toml");
    std::fs::write(
        &path,
        r#"
dry_run = true

[reddit]
min_score = 42
"#,
    )?;

    let config = BotConfig::from_file(&path)?;

    assert!(config.dry_run);
    assert_eq!(config.reddit.min_score, 42);
    Ok(())
}

#[test]
fn test_from_file_keeps_bundled_defaults_for_unset_keys() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("skylark.toml");
    std::fs::write(
        &path,
        r#"
[schedule]
interval_minutes = 15
"#,
    )?;

    let config = BotConfig::from_file(&path)?;

    assert_eq!(config.schedule.interval_minutes, 15);
    assert_eq!(config.schedule.jitter_minutes, 30);
    assert_eq!(config.reddit.subreddits, "all");
    assert_eq!(config.bluesky.service, "https://bsky.social");
    assert_eq!(config.store.database_url, "skylark.db");
    Ok(())
}

#[test]
fn test_from_file_reads_provider_settings() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("skylark.toml");
    std::fs::write(
        &path,
        r#"
[llm]
provider_priority = "gemini,groq"
groq_model = "llama-3.1-8b-instant"
"#,
    )?;

    let config = BotConfig::from_file(&path)?;

    assert_eq!(config.llm.provider_priority.as_deref(), Some("gemini,groq"));
    assert_eq!(
        config.llm.groq_model.as_deref(),
        Some("llama-3.1-8b-instant")
    );
    assert!(config.llm.provider.is_none());
    Ok(())
}

#[test]
fn test_env_overrides_file_values() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("skylark.toml");
    std::fs::write(
        &path,
        r#"
[store]
retention_days = 10
"#,
    )?;

    unsafe {
        std::env::set_var("SKYLARK_STORE__RETENTION_DAYS", "7");
    }
    let config = BotConfig::from_file(&path);
    unsafe {
        std::env::remove_var("SKYLARK_STORE__RETENTION_DAYS");
    }

    assert_eq!(config?.store.retention_days, 7);
    Ok(())
}

#[test]
fn test_from_file_rejects_malformed_toml() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("skylark.toml");
    std::fs::write(&path, "reddit = {{ not toml")?;

    assert!(BotConfig::from_file(&path).is_err());
    Ok(())
}
