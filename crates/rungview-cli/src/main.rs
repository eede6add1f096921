//! rungview CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use rungview_cli::Args;

fn main() {
    // Parse configuration first
    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting rungview");
    debug!(args:?; "Parsed arguments");

    // Run the application
    if let Err(err) = rungview_cli::run(&args) {
        error!(err:err; "Processing failed");
        eprintln!("Error: {err}");
        process::exit(1);
    }

    info!("Completed successfully");
}
