pub mod build;
pub mod populate;
pub mod serve;

use anyhow::{Context, Result};
use riviera_core::Palette;
use riviera_core::Theme;

use crate::config::BuildConfig;

/// Load the theme from the configured `site.json` and resolve it.
pub(crate) fn load_palette(build: &BuildConfig) -> Result<Palette> {
    let theme = Theme::load_or_default(&build.site_file)
        .with_context(|| format!("Failed to load theme from {}", build.site_file))?;
    Ok(Palette::from(&theme))
}
