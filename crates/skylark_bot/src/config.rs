//! Bot configuration.
//!
//! TOML-based configuration with a precedence chain:
//! - Bundled defaults (include_str! from skylark.toml)
//! - User overrides (~/.config/skylark/skylark.toml, then ./skylark.toml)
//! - `SKYLARK_`-prefixed environment variables (`__` separates sections)
//!
//! Credentials are not part of this file; they come straight from the
//! process environment at wiring time.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use skylark_error::{ConfigError, SkylarkResult};
use skylark_social::{DEFAULT_SERVICE, DEFAULT_USER_AGENT};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../skylark.toml");

/// Configuration for the bot server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    /// Reddit listing settings
    #[serde(default)]
    pub reddit: RedditConfig,
    /// Model provider settings
    #[serde(default)]
    pub llm: LlmConfig,
    /// Bluesky settings
    #[serde(default)]
    pub bluesky: BlueskyConfig,
    /// Posted-thread store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Scheduler settings
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// HTTP API settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Log the would-be post instead of publishing or recording it
    #[serde(default)]
    pub dry_run: bool,
}

impl BotConfig {
    /// Load configuration with precedence: environment > current dir >
    /// home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped when absent.
    #[instrument]
    pub fn load() -> SkylarkResult<Self> {
        debug!("loading configuration with the default lookup chain");

        let mut builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/skylark/skylark.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("skylark").required(false));

        Self::finish(builder)
    }

    /// Load configuration from a specific file over the bundled defaults.
    ///
    /// The usual home/current-directory lookup is skipped; environment
    /// overrides still apply.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> SkylarkResult<Self> {
        debug!("loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));

        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> SkylarkResult<Self> {
        builder
            .add_source(
                Environment::with_prefix("SKYLARK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| {
                ConfigError::new(format!("Failed to parse configuration: {}", e)).into()
            })
    }
}

/// Reddit listing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditConfig {
    /// Comma- or plus-separated subreddit list
    pub subreddits: String,
    /// Minimum post score to qualify as trending
    pub min_score: i64,
    /// User-Agent sent with listing requests
    pub user_agent: String,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            subreddits: "all".to_string(),
            min_score: 500,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Model provider settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Comma-separated provider attempt order
    #[serde(default)]
    pub provider_priority: Option<String>,
    /// Older single-provider setting, honored only when
    /// `provider_priority` is absent
    #[serde(default)]
    pub provider: Option<String>,
    /// Model override for Cloudflare Workers AI
    #[serde(default)]
    pub cloudflare_model: Option<String>,
    /// Model override for Groq
    #[serde(default)]
    pub groq_model: Option<String>,
    /// Model override for Gemini
    #[serde(default)]
    pub gemini_model: Option<String>,
}

/// Bluesky settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlueskyConfig {
    /// PDS service URL
    pub service: String,
}

impl Default for BlueskyConfig {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
        }
    }
}

/// Posted-thread store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite database path (`:memory:` supported)
    pub database_url: String,
    /// Days to keep posted-thread records
    pub retention_days: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: "skylark.db".to_string(),
            retention_days: 30,
        }
    }
}

/// Scheduler settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Base interval between runs (minutes)
    pub interval_minutes: u64,
    /// Maximum jitter around the base interval (±minutes)
    pub jitter_minutes: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 360,
            jitter_minutes: 30,
        }
    }
}

/// HTTP API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the API listener
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Scheduler timing derived from configuration.
#[derive(Debug, Clone)]
pub struct BotSchedule {
    /// Base interval between runs
    pub run_interval: Duration,
    /// Jitter range (±)
    pub jitter: Duration,
}

impl From<&BotConfig> for BotSchedule {
    fn from(config: &BotConfig) -> Self {
        Self {
            run_interval: Duration::from_secs(config.schedule.interval_minutes * 60),
            jitter: Duration::from_secs(config.schedule.jitter_minutes * 60),
        }
    }
}
