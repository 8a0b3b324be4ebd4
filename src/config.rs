use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::ledger::DEFAULT_AMOUNT_MAX_LEN;

const CONFIG_FILE_NAME: &str = "budgetpie.toml";
const ENV_PREFIX: &str = "BUDGETPIE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Start with the dark palette.
    pub dark_mode: bool,
    /// Longest raw expense amount accepted, in characters.
    pub amount_max_len: usize,
    pub log_level: String,
    /// Logging is off unless a file is given; the terminal belongs to the UI.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            amount_max_len: DEFAULT_AMOUNT_MAX_LEN,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "budgetpie", version, about = "Monthly budget with a live spending chart")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long, env = "BUDGETPIE_CONFIG")]
    pub config: Option<PathBuf>,
    /// Start in dark mode.
    #[arg(long)]
    pub dark: bool,
    /// Override the expense amount length cap.
    #[arg(long)]
    pub amount_max_len: Option<usize>,
    /// Write logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Log level filter (e.g. debug, info).
    #[arg(long)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CliCommand {
    /// Print the budget summary for the given income and expenses
    Summary {
        /// Monthly income, e.g. 2500 or 1234.50
        #[arg(long)]
        income: String,
        /// Expense as <title>,<amount>,<category>; repeatable
        #[arg(long = "expense")]
        expenses: Vec<String>,
    },
}

pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "budgetpie", "budgetpie")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

pub fn load() -> Result<(AppConfig, Option<CliCommand>)> {
    let args = Args::parse();
    let command = args.command.clone();
    Ok((load_from(&args)?, command))
}

/// Layer the config file, `BUDGETPIE_*` environment variables, then flags.
pub fn load_from(args: &Args) -> Result<AppConfig> {
    load_with_env(args, None)
}

/// `env` replaces the process environment when given.
fn load_with_env(args: &Args, env: Option<config::Map<String, String>>) -> Result<AppConfig> {
    let mut builder = config::Config::builder();
    if let Some(path) = args.config.clone().or_else(default_config_path) {
        builder = builder.add_source(config::File::from(path).required(false));
    }
    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(env),
    );

    let mut settings: AppConfig = builder
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")?;

    if args.dark {
        settings.dark_mode = true;
    }
    if let Some(len) = args.amount_max_len {
        settings.amount_max_len = len;
    }
    if let Some(path) = &args.log_file {
        settings.log_file = Some(path.clone());
    }
    if let Some(level) = &args.log_level {
        settings.log_level = level.clone();
    }

    if settings.amount_max_len == 0 {
        anyhow::bail!("amount_max_len must be at least 1");
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
