//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. The file lives in
//! the site root next to `projects.json` and the blog sources:
//!
//! ```text
//! site/
//! ├── config.toml        # Site config (optional, stock defaults otherwise)
//! ├── projects.json      # Project list for the Tools tab
//! └── blogs/
//!     └── blog1.md       # Post sources, referenced from [[posts]]
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "folio"                  # Document title
//! base_url = "http://localhost/"   # Origin the router resolves links against
//! projects_path = "projects.json"  # Resource listing the Tools tab projects
//! reveal_delay_ms = 100            # Stagger between revealed items
//! theme_key = "theme"              # Storage key of the theme preference
//! about = ""                       # Markdown shown in the about pane
//!
//! [[posts]]
//! title = "How I Caused a Denial of Service by Poisoning the Cache"
//! date = "08 Aug 2025"
//! source_path = "blogs/blog1.md"
//! slug = "Cache-Poisoning-Dos"
//! ```
//!
//! Unknown keys are rejected to catch typos early. Slugs are route keys, so
//! duplicates are a load error rather than a silent first-match.

use crate::types::BlogPostMeta;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document title of every rendered page.
    pub title: String,
    /// Origin used to resolve relative URLs and decide which links stay in-page.
    pub base_url: String,
    /// Site-relative path of the projects list.
    pub projects_path: String,
    /// Base delay of the staggered reveal, in milliseconds.
    pub reveal_delay_ms: u64,
    /// Key the theme preference is persisted under.
    pub theme_key: String,
    /// Markdown body of the about pane.
    pub about: String,
    /// The static post table. Order is display order.
    pub posts: Vec<BlogPostMeta>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "folio".to_string(),
            base_url: "http://localhost/".to_string(),
            projects_path: "projects.json".to_string(),
            reveal_delay_ms: 100,
            theme_key: "theme".to_string(),
            about: String::new(),
            posts: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Validate config values and the integrity of the post table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reveal_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "reveal_delay_ms must be greater than zero".into(),
            ));
        }
        if self.theme_key.is_empty() {
            return Err(ConfigError::Validation("theme_key must not be empty".into()));
        }
        if self.projects_path.trim_start_matches('/').is_empty() {
            return Err(ConfigError::Validation(
                "projects_path must name a file".into(),
            ));
        }
        self.base_url()?;

        let mut seen = HashSet::new();
        for post in &self.posts {
            if post.slug.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "post '{}' has an empty slug",
                    post.title
                )));
            }
            if !post.slug.chars().all(is_slug_char) {
                return Err(ConfigError::Validation(format!(
                    "slug '{}' is not URL-safe (allowed: letters, digits, '-', '_', '.', '~')",
                    post.slug
                )));
            }
            if post.source_path.trim_start_matches('/').is_empty() {
                return Err(ConfigError::Validation(format!(
                    "post '{}' has an empty source_path",
                    post.slug
                )));
            }
            if !seen.insert(post.slug.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate slug '{}'",
                    post.slug
                )));
            }
        }
        Ok(())
    }

    /// The parsed `base_url`.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url).map_err(|e| {
            ConfigError::Validation(format!("base_url '{}' is invalid: {e}", self.base_url))
        })
    }

    /// Look up a post by slug.
    pub fn find_post(&self, slug: &str) -> Option<&BlogPostMeta> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Parse `config.toml` contents and validate them.
///
/// Missing keys take their defaults through `#[serde(default)]`, so a file
/// only has to name what it changes. A `[[posts]]` list replaces the whole
/// (empty) default post table.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given site root.
///
/// A missing file yields the validated defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    if !config_path.exists() {
        let config = SiteConfig::default();
        config.validate()?;
        return Ok(config);
    }
    parse_config(&fs::read_to_string(&config_path)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# folio configuration
# ===================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Title of every rendered page.
title = "folio"

# Origin the router resolves links against. Links to any other host are
# left to the browser.
base_url = "http://localhost/"

# Site-relative path of the JSON project list shown in the Tools tab:
# [{"name": "...", "url": "...", "description": "..."}]
projects_path = "projects.json"

# Delay between revealed list items, in milliseconds. Item N (1-based)
# becomes visible after N * reveal_delay_ms.
reveal_delay_ms = 100

# Storage key of the light/dark preference ("light" or "dark").
theme_key = "theme"

# Markdown shown in the about pane.
about = ""

# ---------------------------------------------------------------------------
# Posts
# ---------------------------------------------------------------------------
# One [[posts]] table per blog post, in display order. The slug is the route
# key (/blogs/<slug>) and must be unique.
#
# [[posts]]
# title = "How I Caused a Denial of Service by Poisoning the Cache"
# date = "08 Aug 2025"
# source_path = "blogs/blog1.md"
# slug = "Cache-Poisoning-Dos"
"##
}
