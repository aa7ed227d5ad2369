//! CRM CLI
//!
//! Command-line front end: store setup, first-user bootstrap and the
//! interactive operator menu.

use clap::{Parser, Subcommand};
use crm_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;
mod config;

use config::CrmConfig;

#[derive(Debug, Parser)]
#[command(name = "crm")]
#[command(about = "CRM - customers, products, support and tickets in a local store", long_about = None)]
struct Cli {
    /// Store file
    #[arg(long, global = true, env = "CRM_DB", default_value = crm_store::db::DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Directory CSV exports are written to
    #[arg(long, global = true, env = "CRM_EXPORT_DIR", default_value = ".")]
    export_dir: PathBuf,

    /// Log output: operator, dev or json
    #[arg(long, global = true, env = "CRM_LOG_FORMAT", default_value = "operator")]
    log_format: Profile,

    /// End the whole session on an invalid sub-menu choice
    #[arg(long, global = true)]
    exit_on_invalid: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the store and its tables, then exit
    Init,
    /// Create the first operator account of an empty store
    BootstrapUser(commands::bootstrap::BootstrapArgs),
    /// Log in and run the interactive menu (default)
    Menu,
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format);

    let config = CrmConfig {
        db_path: cli.db,
        export_dir: cli.export_dir,
        exit_on_invalid: cli.exit_on_invalid,
    };

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Init => commands::init::execute(&config),
        Commands::BootstrapUser(args) => commands::bootstrap::execute(&config, args),
        Commands::Menu => commands::menu::execute(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
