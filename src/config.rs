//! Application configuration.
//!
//! Behavior constants live in `termfolio_core::config`. This module holds
//! the web host's settings: app metadata, compile-time text assets, and the
//! site content loaded from `assets/site.toml`.

use serde::Deserialize;
use termfolio_core::{ContentItem, FileItem, Section};
use thiserror::Error;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Banner printed to the terminal on startup.
pub const BANNER: &str = include_str!("../assets/banner.txt");

/// Site content: sidebar entries and static section items.
pub const SITE_TOML: &str = include_str!("../assets/site.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Host name shown in the title bar and prompt.
pub const APP_NAME: &str = "terminal";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Network Configuration
// =============================================================================

/// GitHub REST API base URL.
pub const GITHUB_API: &str = "https://api.github.com";

// =============================================================================
// UI Configuration
// =============================================================================

/// Status bar clock refresh interval in milliseconds.
pub const CLOCK_TICK_MS: u32 = 1000;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Site Content
// =============================================================================

/// Invalid `site.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site.toml parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("site.toml declares no files")]
    NoFiles,
}

/// Owner of the portfolio.
#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    pub github_user: String,
    #[serde(default = "default_repos_per_page")]
    pub repos_per_page: u32,
}

fn default_repos_per_page() -> u32 {
    12
}

/// Static text and navigable items of one section.
#[derive(Clone, Debug, Deserialize)]
pub struct SectionContent {
    pub section: Section,
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SiteConfig {
    pub profile: Profile,
    pub files: Vec<FileItem>,
    #[serde(default)]
    pub sections: Vec<SectionContent>,
}

impl SiteConfig {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        if config.files.is_empty() {
            return Err(ConfigError::NoFiles);
        }
        Ok(config)
    }

    /// The bundled `site.toml`, or the built-in defaults if it is invalid.
    pub fn load() -> Self {
        Self::parse(SITE_TOML).unwrap_or_else(|e| {
            log::warn!("{}; using built-in defaults", e);
            Self::default()
        })
    }

    /// Repository listing endpoint for the configured user.
    pub fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            GITHUB_API, self.profile.github_user, self.profile.repos_per_page
        )
    }

    pub fn section(&self, section: Section) -> Option<&SectionContent> {
        self.sections.iter().find(|s| s.section == section)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            profile: Profile {
                github_user: termfolio_core::config::USER_NAME.to_string(),
                repos_per_page: default_repos_per_page(),
            },
            files: vec![
                FileItem::file("welcome.txt", Section::Welcome),
                FileItem::folder("projects", Section::Projects, false),
                FileItem::folder("connect", Section::Connect, false),
                FileItem::file("about.md", Section::About),
                FileItem::file("terminal.js", Section::Terminal),
            ],
            sections: vec![],
        }
    }
}
