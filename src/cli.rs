use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "wingup",
    about = "Pick which winget packages to upgrade, then upgrade them in one batch",
    version,
    author
)]
pub struct Cli {
    /// Package manager executable to drive
    #[arg(short, long, default_value = "winget", global = true)]
    pub manager: String,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `upgrade` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactively select packages and upgrade them
    Upgrade {
        /// Select every upgradeable package without asking one by one
        #[arg(long)]
        all: bool,

        /// Skip the final confirmation
        #[arg(short, long)]
        yes: bool,

        /// Show what would be upgraded without running any upgrade
        #[arg(long)]
        dry_run: bool,

        /// Run upgrades silently and accept package/source agreements
        #[arg(long)]
        silent: bool,
    },

    /// List upgradeable packages without changing anything
    List {
        /// Print the packages as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Upgrade {
            all: false,
            yes: false,
            dry_run: false,
            silent: false,
        }
    }
}
