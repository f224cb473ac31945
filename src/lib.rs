//! agency-blog: the blog behind an agency landing page
//!
//! Posts live in a headless CMS. This crate queries published posts through
//! a [`content::PostRepository`], turns their rich-text bodies into display
//! blocks, and serves the landing blog section, the blog index and post
//! pages over HTTP.

pub mod cms;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use cms::{ContentSource, MemorySource, PayloadClient};
use config::{CmsBackend, SiteConfig};
use content::PostRepository;

/// Default config file name, relative to the base directory
pub const CONFIG_FILE: &str = "site.yml";

/// The blog application
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: SiteConfig,
    /// Published posts
    pub posts: PostRepository,
}

impl Site {
    /// Create a site from a directory, reading `site.yml` (or `config_path`)
    pub fn new<P: AsRef<Path>>(base_dir: P, config_path: Option<&Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config = match config_path {
            Some(path) => SiteConfig::load(path)?,
            None => SiteConfig::load_or_default(base_dir.join(CONFIG_FILE))?,
        };
        let source = connect(&config, base_dir)?;
        Ok(Self::with_source(config, source))
    }

    /// Create a site around an already connected content source
    pub fn with_source(config: SiteConfig, source: Arc<dyn ContentSource>) -> Self {
        let posts = PostRepository::with_collection(source, &config.cms.collection);
        Self { config, posts }
    }
}

/// Build the content source named by the config
fn connect(config: &SiteConfig, base_dir: &Path) -> Result<Arc<dyn ContentSource>> {
    match config.cms.backend {
        CmsBackend::Payload => {
            tracing::info!("Using Payload CMS at {}", config.cms.base_url);
            let client = PayloadClient::new(
                &config.cms.base_url,
                config.cms.api_key.clone(),
                config.cms.timeout(),
            )?;
            Ok(Arc::new(client))
        }
        CmsBackend::Memory => {
            let path = base_dir.join(&config.cms.fixture);
            let source = MemorySource::from_fixture(&path)?;
            Ok(Arc::new(source))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_site_from_fixture() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "cms:\n  backend: memory\n  fixture: cms.json\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("cms.json"),
            r#"{"posts": [{"id": "1", "slug": "hello", "title": "Hello", "status": "published"}]}"#,
        )
        .unwrap();

        let site = Site::new(dir.path(), None).unwrap();
        assert_eq!(site.posts.list_slugs().await.unwrap(), vec!["hello"]);
    }

    #[test]
    fn test_missing_fixture_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "cms:\n  backend: memory\n").unwrap();
        assert!(Site::new(dir.path(), None).is_err());
    }
}
