//! `gherkin-line` binary.
//!
//! Exits with status 2 on configuration errors and 1 when a command fails.

use std::io;

use clap::Parser;
use tracing::info;

use gherkin_line_cli::cli::{Cli, Outcome, run};
use gherkin_line_cli::config::CliConfig;
use gherkin_line_cli::error::CliError;
use gherkin_line_cli::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);
    info!(version = env!("CARGO_PKG_VERSION"), "starting gherkin-line");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &config, &mut out) {
        Ok(Outcome::Success) => {}
        Ok(Outcome::Failed) => std::process::exit(1),
        Err(e) => {
            tracing::error!(error = ?e, "command failed");
            std::process::exit(1);
        }
    }
}

fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    cli.configure(CliConfig::from_env()?)
}
