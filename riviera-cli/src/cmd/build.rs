use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use riviera_core::SiteBuilder;
use std::time::Instant;

use crate::cmd::load_palette;
use crate::config::RivieraConfig;
use crate::logging::format_elapsed;

/// Flags shared by every command that renders pages.
pub fn add_content_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("content")
                .long("content")
                .value_name("DIR")
                .help("Directory containing the page documents [default: ./content/pages]"),
        )
        .arg(
            Arg::new("site")
                .long("site")
                .value_name("FILE")
                .help("site.json holding the theme [default: ./content/site.json]"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file [default: ./riviera.toml]"),
        )
}

pub fn make_subcommand() -> Command {
    add_content_args(Command::new("build"))
        .about("Render every page document into static HTML")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Output directory for generated site [default: ./dist]"),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = RivieraConfig::load(args)?;
    let build_config = config.build_config();
    let started = Instant::now();

    let site = SiteBuilder::new()
        .source_dir(&build_config.content)
        .output_dir(&build_config.output)
        .palette(load_palette(build_config)?)
        .site_config(config.site_config().clone())
        .cname(&build_config.cname)
        .build()?;
    let report = site.render_all()?;

    log::info!(
        "Built {} pages into {} in {}",
        report.built.len().to_string().bold(),
        site.output_dir().display(),
        format_elapsed(started.elapsed())
    );

    if !report.is_clean() {
        let routes: Vec<&str> = report.failures.iter().map(|(route, _)| route.as_str()).collect();
        log::warn!(
            "{} pages skipped: {}",
            report.failures.len().to_string().red(),
            routes.join(", ")
        );
    }
    if report.copied_cname {
        log::info!("Copied CNAME");
    }

    Ok(())
}
