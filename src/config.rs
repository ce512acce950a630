use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{DEFAULT_API_BASE, DEFAULT_ROTATION_PERIOD, TOAST_TTL};

/// Default config file path.
pub const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding the configured API base URL.
pub const API_BASE_ENV: &str = "COLORBET_API_BASE";

/// Top-level application config deserialized from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Activity feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Milliseconds between feed rotations.
    #[serde(default = "default_rotation_ms")]
    pub rotation_interval_ms: u64,
    /// Seconds a failure toast stays visible.
    #[serde(default = "default_toast_ttl_secs")]
    pub toast_ttl_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_rotation_ms() -> u64 {
    DEFAULT_ROTATION_PERIOD.as_millis() as u64
}

fn default_toast_ttl_secs() -> u64 {
    TOAST_TTL.as_secs()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            rotation_interval_ms: default_rotation_ms(),
            toast_ttl_secs: default_toast_ttl_secs(),
        }
    }
}

impl AppConfig {
    /// Load config from the given TOML file path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Load config, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write config to the given TOML file path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Resolve the API base URL, preferring `override_url` (typically the
    /// `COLORBET_API_BASE` environment variable) over the configured value.
    pub fn base_url(&self, override_url: Option<String>) -> Result<Url> {
        let raw = override_url.unwrap_or_else(|| self.api.base_url.clone());
        Url::parse(&raw).with_context(|| format!("invalid API base URL: {raw}"))
    }

    /// Rotation period, clamped to at least one millisecond.
    pub fn rotation_period(&self) -> Duration {
        Duration::from_millis(self.feed.rotation_interval_ms.max(1))
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_secs(self.feed.toast_ttl_secs.max(1))
    }
}
