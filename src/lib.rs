//! termsite: a small personal website with a markdown blog
//!
//! Posts are markdown files with front-matter, read from disk on every
//! request. Pages are served whole on a normal load and as bare content
//! fragments when the client navigates with htmx.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod layout;
pub mod pages;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The site: configuration plus the directories it reads from
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding `<slug>.md` posts
    pub posts_dir: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        // Absolute paths replace the base directory when joined
        let posts_dir = base_dir.join(&config.posts_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Self {
            config,
            base_dir,
            posts_dir,
            static_dir,
        }
    }

    /// Repository over this site's posts directory
    pub fn repository(&self) -> content::PostRepository {
        content::PostRepository::new(&self.posts_dir)
    }

    /// List posts in the terminal
    pub fn list(&self) -> Result<()> {
        commands::list::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_site_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.posts_dir, dir.path().join("posts"));
        assert_eq!(site.static_dir, dir.path().join("static"));
    }

    #[test]
    fn test_site_reads_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "posts_dir: content\nauthor: Someone\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.author, "Someone");
        assert_eq!(site.repository().posts_dir(), dir.path().join("content"));
    }
}
