use anyhow::Result;
use clap::Parser;
use museum_mapper::commands::common::{InputOverrides, Inputs};
use museum_mapper::config::Config;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::dispatch::dispatch;
use cli::types::Cli;

/// Environment variable holding the log filter, e.g. `museum_mapper=debug`.
const LOG_ENV: &str = "MUSEUM_MAPPER_LOG";

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let config = Config::load(cli.global.config.as_deref())?;
    let overrides = InputOverrides {
        census: cli.global.census,
        mapping: cli.global.mapping,
        thesaurus: cli.global.thesaurus,
        delimiter: cli.global.delimiter,
    };
    let inputs = Inputs::new(config, overrides);

    dispatch(cli.command, &inputs)
}
