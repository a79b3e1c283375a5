use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Theme tokens as they appear under the `theme` key of `site.json`.
/// Every token is optional; [`Palette`] fills in the gaps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub semantic_colors: SemanticColors,
    pub colors: Colors,
    pub fonts: Fonts,
    pub gradients: Gradients,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SemanticColors {
    pub brand: Option<String>,
    pub background: Option<String>,
    pub background_alt: Option<String>,
    pub foreground: Option<String>,
    pub foreground_muted: Option<String>,
    pub border: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub accent: Option<String>,
    /// Shade scale keyed by weight ("50" .. "900").
    pub primary: BTreeMap<String, String>,
    pub secondary: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Fonts {
    pub display: Option<String>,
    pub sans: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Gradients {
    pub hero: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SiteFile {
    theme: Theme,
}

impl Theme {
    /// Read the theme from a `site.json` document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let site: SiteFile = serde_json::from_str(&data).map_err(|source| ThemeError::Json {
            path: path.display().to_string(),
            source,
        })?;
        Ok(site.theme)
    }

    /// Like [`Theme::load`], but a missing file yields the default theme.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!(
                "No site configuration at {}, using the default theme",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

/// Resolved design tokens used by every renderer and the page templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub brand: String,
    pub brand_hover: String,
    pub background: String,
    pub background_alt: String,
    pub foreground: String,
    pub foreground_muted: String,
    pub border: String,
    pub navy: String,
    pub cream: String,
    pub white: String,
    pub gray: String,
    pub gray_light: String,
    pub font_serif: String,
    pub font_sans: String,
    pub hero_gradient: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::from(&Theme::default())
    }
}

impl From<&Theme> for Palette {
    fn from(theme: &Theme) -> Self {
        let semantic = &theme.semantic_colors;
        let pick = |value: &Option<String>, fallback: &str| {
            value.clone().unwrap_or_else(|| fallback.to_string())
        };

        Palette {
            brand: semantic
                .brand
                .clone()
                .or_else(|| theme.colors.accent.clone())
                .unwrap_or_else(|| "#0d9488".to_string()),
            brand_hover: theme
                .colors
                .primary
                .get("700")
                .cloned()
                .unwrap_or_else(|| "#0f766e".to_string()),
            background: pick(&semantic.background, "#ffffff"),
            background_alt: pick(&semantic.background_alt, "#fafaf9"),
            foreground: pick(&semantic.foreground, "#0a1628"),
            foreground_muted: pick(&semantic.foreground_muted, "#64748b"),
            border: pick(&semantic.border, "#e5e7eb"),
            navy: pick(&semantic.foreground, "#0a1628"),
            cream: pick(&semantic.background_alt, "#fafaf9"),
            white: "#ffffff".to_string(),
            gray: pick(&semantic.foreground_muted, "#64748b"),
            gray_light: theme
                .colors
                .secondary
                .get("400")
                .cloned()
                .unwrap_or_else(|| "#94a3b8".to_string()),
            font_serif: pick(&theme.fonts.display, "'Cormorant Garamond', Georgia, serif"),
            font_sans: pick(
                &theme.fonts.sans,
                "'Inter', -apple-system, BlinkMacSystemFont, sans-serif",
            ),
            hero_gradient: pick(
                &theme.gradients.hero,
                "linear-gradient(180deg,rgba(10,22,40,0.6) 0%,rgba(10,22,40,0.4) 100%)",
            ),
        }
    }
}

impl Palette {
    /// First family of the display font stack, without quotes.
    pub fn display_family(&self) -> String {
        first_family(&self.font_serif)
    }

    pub fn sans_family(&self) -> String {
        first_family(&self.font_sans)
    }
}

fn first_family(stack: &str) -> String {
    stack
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .replace(['\'', '"'], "")
}
