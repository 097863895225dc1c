mod app;
mod effects;
mod logging;
mod ui;

use clap::Parser;
use url::Url;

use crate::logging::LogDestination;

/// Terminal dashboard for the box monitoring backend.
#[derive(Debug, Parser)]
#[command(name = "watchdeck", version, about)]
pub struct Args {
    /// Base URL of the monitoring backend. The live feed and all commands
    /// derive from it.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub base_url: Url,

    /// Where log output goes. The terminal belongs to the UI, so logs
    /// default to ./watchdeck.log.
    #[arg(long, value_enum, default_value = "file")]
    pub log: LogDestination,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(args.log);
    app::run(args)
}
