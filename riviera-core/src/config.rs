use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
}

/// Site-wide values used by the page shell.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Fallback page title and header brand.
    pub title: String,
    pub tagline: String,
    /// Prefix for canonical links, without a trailing slash.
    pub base_url: String,
    /// Locale used when resolving localized content.
    pub locale: String,
    pub copyright: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Cinqueterre.travel".to_string(),
            tagline: "Your Complete Guide to Italy's Coastal Paradise".to_string(),
            base_url: "https://cinqueterre.travel".to_string(),
            locale: "en".to_string(),
            copyright: "© 2025 Cinqueterre.travel · Built with swarm.press".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn canonical_url(&self, route: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), route)
    }
}
