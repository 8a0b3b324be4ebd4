mod config;
mod income;
mod ledger;
mod logging;
mod models;
mod money;
mod run;
mod summary;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let (config, command) = config::load()?;
    logging::init(&config)?;

    match command {
        Some(command) => run::as_cli(command, &config),
        None => run::as_tui(&config),
    }
}
