// vidscan-cli/src/main.rs
//
// Entry point for the vidscan CLI: parses arguments, initializes logging,
// dispatches to the requested command and maps failures to exit code 1.

use clap::Parser;
use std::process;

mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report(args) => commands::report::run_report(args),
    };

    if let Err(err) = result {
        log::error!("FATAL: {err:#}");
        process::exit(1);
    }
}
