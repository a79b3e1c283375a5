mod cmd;
mod config;
mod logging;

use anyhow::Result;
use clap::Command;

fn cli() -> Command {
    Command::new("riviera")
        .about("Static site generator for the Cinque Terre travel guide")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::build::make_subcommand())
        .subcommand(cmd::serve::make_subcommand())
        .subcommand(cmd::populate::make_subcommand())
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();

    match cli().get_matches().subcommand() {
        Some(("build", args)) => cmd::build::execute(args),
        Some(("serve", args)) => cmd::serve::execute(args).await,
        Some(("populate", args)) => cmd::populate::execute(args),
        _ => unreachable!("subcommand is required"),
    }
}
