//! Cabinet CLI Binary
//!
//! Command-line interface for querying folder cabinets.

use cabinet::config::ConfigLoader;
use cabinet::logging::init_logging;
use cabinet::tooling::cli::{Cli, CliContext};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    let mut config = match ConfigLoader::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };
    cli.apply_logging_overrides(&mut config.logging);

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let context = match CliContext::with_config(&config, cli.layout.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading cabinet: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
