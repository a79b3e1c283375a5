use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use riviera_dev_server::{PreviewConfig, PreviewServer};
use std::path::PathBuf;

use crate::cmd::build::add_content_args;
use crate::cmd::load_palette;
use crate::config::RivieraConfig;

pub fn make_subcommand() -> Command {
    add_content_args(Command::new("serve"))
        .about("Start the preview server, rendering pages on every request")
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Port to serve on [default: 8888]"),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .help("Host to bind to [default: 127.0.0.1]"),
        )
        .arg(
            Arg::new("open")
                .long("open")
                .help("Open browser automatically")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Answer unknown pages with 404 instead of 200")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-reload")
                .long("no-reload")
                .help("Disable live reload")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn execute(args: &ArgMatches) -> Result<()> {
    let config = RivieraConfig::load(args)?;
    let build_config = config.build_config();

    let server_config = PreviewConfig {
        host: build_config.host.clone(),
        port: build_config.port,
        content_dir: PathBuf::from(&build_config.content),
        open: build_config.open,
        strict_status: build_config.strict_status,
        live_reload: !args.get_flag("no-reload"),
    };

    let server = PreviewServer::new(
        server_config,
        load_palette(build_config)?,
        config.site_config().clone(),
    )?;
    server.run().await
}
