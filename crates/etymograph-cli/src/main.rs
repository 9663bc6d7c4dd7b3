//! Etymograph CLI entry point.

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use etymograph_cli::{Args, error_adapter::render_report};

/// Sets up `env_logger` at `level`, or at `warn` when `level` is not a level name.
fn init_logging(level: &str) -> LevelFilter {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
    filter
}

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    let log_level = init_logging(&args.log_level);
    info!(log_level:? = log_level, input = args.input; "Starting Etymograph");
    debug!(args:?; "Parsed arguments");

    match etymograph_cli::run(&args) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", render_report(&err, &GraphicalReportHandler::new()));
            ExitCode::FAILURE
        }
    }
}
