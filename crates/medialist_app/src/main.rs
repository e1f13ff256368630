mod cli;
mod config;
mod platform;

use clap::Parser;
use medialist_logging::medialist_info;

use crate::cli::Cli;
use crate::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load(&cli.config)?;
    config.apply_overrides(&cli);

    medialist_logging::initialize(config.log_destination.into(), config.log_level.into());
    medialist_info!(
        "Starting medialist against {} (config {:?})",
        config.api_base_url,
        cli.config
    );
    platform::run_app(config)
}
