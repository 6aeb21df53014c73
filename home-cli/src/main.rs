use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing::debug;

use home_cli::{app, cli::Cli, config::AppConfig, logging};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("cannot load configuration")?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    logging::init_logging(&config.logging)?;

    debug!(command = ?cli.command, "running");
    let report = app::run(&cli.command, &config, Local::now().date_naive())?;
    print!("{report}");

    Ok(())
}
