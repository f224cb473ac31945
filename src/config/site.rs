//! Site configuration (site.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable that overrides `cms.api_key`
pub const API_KEY_ENV: &str = "AGENCY_BLOG_CMS_API_KEY";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    #[serde(default)]
    pub cms: CmsConfig,
    #[serde(default)]
    pub blog: BlogConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Agency".to_string(),
            url: "http://localhost:4000".to_string(),
            cms: CmsConfig::default(),
            blog: BlogConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("reading config {:?}", path))?;
        let mut config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config {:?}", path))?;
        config.apply_env();
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            let mut config = Self::default();
            config.apply_env();
            Ok(config)
        }
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                self.cms.api_key = Some(key);
            }
        }
    }
}

/// Which content source backs the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CmsBackend {
    /// Payload REST API
    Payload,
    /// JSON fixture held in memory
    Memory,
}

/// CMS connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    pub backend: CmsBackend,
    pub base_url: String,
    pub api_key: Option<String>,
    pub collection: String,
    /// Fixture file for the memory backend
    pub fixture: String,
    pub timeout_ms: u64,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            backend: CmsBackend::Payload,
            base_url: "http://localhost:3000".to_string(),
            api_key: None,
            collection: "posts".to_string(),
            fixture: "cms.json".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl CmsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Blog presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Posts shown in the landing page blog section
    pub latest_limit: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self { latest_limit: 3 }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}
