//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    /// Fallback page title when a page does not supply one
    pub title: String,
    pub author: String,
    /// Short mark shown at the left of the navigation bar
    pub brand: String,
    pub tagline: String,
    pub description: String,
    pub copyright: String,

    // Directory
    pub posts_dir: String,
    pub static_dir: String,

    // Home page
    pub recent_posts: usize,
    #[serde(default)]
    pub socials: Vec<SocialLink>,

    // Effects
    pub effects: Vec<String>,
    pub default_effect: String,

    // Themes
    pub themes: Vec<ThemeConfig>,
    pub default_theme: String,

    // Assets
    pub htmx_src: String,
    pub stylesheets: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Robbie Preswick".to_string(),
            author: "Robbie Preswick".to_string(),
            brand: "RP".to_string(),
            tagline: "Builder of things.".to_string(),
            description: "Personal website".to_string(),
            copyright: "\u{00a9} 2025".to_string(),

            posts_dir: "posts".to_string(),
            static_dir: "static".to_string(),

            recent_posts: 3,
            socials: vec![
                SocialLink::new("GitHub", "https://github.com/preswick", "\u{f09b}"),
                SocialLink::new("LinkedIn", "https://linkedin.com/in/preswick", "\u{f0e1}"),
                SocialLink::new("X", "https://x.com/rpreswick", "\u{2715}"),
            ],

            effects: ["matrix", "plasma", "fire", "starfield"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_effect: "matrix".to_string(),

            themes: vec![
                ThemeConfig::new("cyberpunk", "Cyberpunk Aurora", "\u{2726}"),
                ThemeConfig::new("darcula", "Darcula", "\u{263e}"),
                ThemeConfig::new("nordic", "Nordic Frost", "\u{2744}"),
                ThemeConfig::new("light", "Lumen Light", "\u{2600}"),
            ],
            default_theme: "cyberpunk".to_string(),

            htmx_src: "https://unpkg.com/htmx.org@2.0.4".to_string(),
            stylesheets: [
                "/static/css/terminal.css",
                "/static/css/effects.css",
                "/static/css/borders.css",
                "/static/css/themes/cyberpunk.css",
                "/static/css/themes/darcula.css",
                "/static/css/themes/nordic.css",
                "/static/css/themes/light.css",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the page shell cannot work with
    fn validate(&self) -> Result<()> {
        if self.themes.is_empty() {
            anyhow::bail!("at least one theme must be configured");
        }
        if !self.themes.iter().any(|t| t.id == self.default_theme) {
            anyhow::bail!(
                "default_theme `{}` is not one of the configured themes",
                self.default_theme
            );
        }
        if !self.effects.is_empty() && !self.effects.contains(&self.default_effect) {
            anyhow::bail!(
                "default_effect `{}` is not one of the configured effects",
                self.default_effect
            );
        }
        Ok(())
    }
}

/// A link shown in the home page hero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
}

impl SocialLink {
    pub fn new(name: &str, url: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// A colour theme the client-side switcher can cycle through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

impl ThemeConfig {
    pub fn new(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.recent_posts, 3);
        assert_eq!(config.effects.len(), 4);
        assert_eq!(config.default_theme, "cyberpunk");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
author: Test User
tagline: Writes code.
posts_dir: content/posts
socials:
  - name: GitHub
    url: https://github.com/test
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.author, "Test User");
        assert_eq!(config.tagline, "Writes code.");
        assert_eq!(config.posts_dir, "content/posts");
        assert_eq!(config.socials.len(), 1);
        assert_eq!(config.socials[0].icon, "");
        // Untouched fields keep their defaults
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    fn test_unknown_default_theme_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "default_theme: solarized\n").unwrap();
        assert!(SiteConfig::load(&path).is_err());
    }
}
