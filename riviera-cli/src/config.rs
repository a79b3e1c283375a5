use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "./riviera.toml";

/// Complete configuration that merges CLI args, env vars, config files, and defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RivieraConfig {
    /// Paths and server options
    pub build: BuildConfig,
    /// Site configuration (from riviera-core)
    #[serde(flatten)]
    pub site: riviera_core::config::Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Directory containing the page documents
    pub content: String,
    /// Output directory for generated site
    pub output: String,
    /// site.json holding the theme
    pub site_file: String,
    /// Custom-domain marker copied into the output
    pub cname: String,
    /// Configuration file path
    pub config: String,
    /// Directory the populate command fills
    pub populate_dir: String,
    /// Host for preview server
    pub host: String,
    /// Port for preview server
    pub port: u16,
    /// Open browser automatically
    pub open: bool,
    /// Answer unknown preview routes with 404
    pub strict_status: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "./content/pages".to_string(),
            output: "./dist".to_string(),
            site_file: "./content/site.json".to_string(),
            cname: "./CNAME".to_string(),
            config: DEFAULT_CONFIG_FILE.to_string(),
            populate_dir: "./content/pages/fr".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8888,
            open: false,
            strict_status: false,
        }
    }
}

impl RivieraConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (RIVIERA_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let config_file =
            string_arg(args, "config").unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        let mut builder = ConfigBuilder::builder();

        // 1. Start with defaults
        let defaults = Self::default();
        builder = builder.add_source(ConfigBuilder::try_from(&defaults)?);

        // 2. Add configuration file if it exists
        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::from(Path::new(&config_file)));
        } else if string_arg(args, "config").is_some() {
            log::warn!("Configuration file {} not found, using defaults", config_file);
        }

        // 3. Add environment variables with RIVIERA_ prefix
        builder = builder.add_source(
            Environment::with_prefix("RIVIERA")
                .prefix_separator("_")
                .separator("__"), // Use double underscore for nested keys
        );

        // 4. Override with CLI arguments (highest priority)
        let mut cli_overrides = HashMap::new();

        for (arg, key) in [
            ("content", "build.content"),
            ("output", "build.output"),
            ("site", "build.site_file"),
            ("config", "build.config"),
            ("dir", "build.populate_dir"),
            ("host", "build.host"),
        ] {
            if let Some(value) = string_arg(args, arg) {
                cli_overrides.insert(key.to_string(), value);
            }
        }
        if let Some(port) = string_arg(args, "port") {
            let port: u16 = port
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid port: {}", port))?;
            cli_overrides.insert("build.port".to_string(), port.to_string());
        }
        if flag_arg(args, "open") {
            cli_overrides.insert("build.open".to_string(), "true".to_string());
        }
        if flag_arg(args, "strict") {
            cli_overrides.insert("build.strict_status".to_string(), "true".to_string());
        }

        if !cli_overrides.is_empty() {
            builder = builder.add_source(ConfigBuilder::try_from(&cli_overrides)?);
        }

        // Build and deserialize
        let config = builder.build()?;
        let riviera_config: RivieraConfig = config.try_deserialize()?;

        Ok(riviera_config)
    }

    pub fn site_config(&self) -> &riviera_core::config::SiteConfig {
        &self.site.site
    }

    pub fn build_config(&self) -> &BuildConfig {
        &self.build
    }
}

// Subcommands define different flags, so look them up without panicking on
// ids the current command doesn't know.
fn string_arg(args: &ArgMatches, id: &str) -> Option<String> {
    args.try_get_one::<String>(id).ok().flatten().cloned()
}

fn flag_arg(args: &ArgMatches, id: &str) -> bool {
    args.try_get_one::<bool>(id)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}
