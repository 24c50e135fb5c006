//! bomm — command-line calculator for locks, bOMM and voting power.

mod commands;
mod config;

use anyhow::Context;
use bomm_types::{Clock, Decimal, SystemClock};
use bomm_utils::{init_logging, LogFormat};
use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;
use crate::config::CalcConfig;

#[derive(Parser)]
#[command(name = "bomm", about = "bOMM lock and voting-power calculator")]
struct Cli {
    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "BOMM_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "BOMM_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "BOMM_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Current time in the configured unit. Defaults to the system clock.
    #[arg(long)]
    now: Option<Decimal>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CalcConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CalcConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let now = match cli.now {
        Some(raw) => config.time_unit.timestamp(raw).context("invalid --now")?,
        None => SystemClock.now(),
    };
    tracing::debug!(%now, command = ?cli.command, "running");

    let report = commands::run(&cli.command, &config, now)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.json)?);
    } else {
        println!("{}", report.human);
    }
    Ok(())
}
