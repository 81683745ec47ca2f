mod agents;
mod cli;
mod error;
mod listing;
mod utils;
mod workflow;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;
use workflow::UpgradeOptions;

fn main() {
    let cli = Cli::parse();

    utils::verbose::set_verbose(cli.verbose);

    let result = match cli.command.unwrap_or_default() {
        Commands::Upgrade {
            all,
            yes,
            dry_run,
            silent,
        } => workflow::execute_upgrade(
            &cli.manager,
            silent,
            UpgradeOptions {
                select_all: all,
                assume_yes: yes,
                dry_run,
            },
        ),
        Commands::List { json } => workflow::execute_list(&cli.manager, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
