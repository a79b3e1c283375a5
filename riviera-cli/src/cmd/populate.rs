use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use riviera_core::Populator;

use crate::config::RivieraConfig;

pub fn make_subcommand() -> Command {
    Command::new("populate")
        .about("Fill empty French page documents from page-type templates")
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .value_name("DIR")
                .help("Directory of page documents to fill [default: ./content/pages/fr]"),
        )
        .arg(
            Arg::new("updated-at")
                .long("updated-at")
                .value_name("TIMESTAMP")
                .help("Value written to updated_at [default: now, RFC 3339]"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file [default: ./riviera.toml]"),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = RivieraConfig::load(args)?;
    let dir = &config.build_config().populate_dir;

    let updated_at = args
        .get_one::<String>("updated-at")
        .cloned()
        .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

    log::info!("Finding empty pages in {}", dir);
    let report = Populator::new(updated_at).populate_dir(dir)?;

    log::info!(
        "Populated {} pages, skipped {} with content",
        report.populated.len().to_string().bold(),
        report.skipped.len()
    );
    if !report.failed.is_empty() {
        log::warn!("{} files could not be processed", report.failed.len().to_string().red());
    }

    Ok(())
}
